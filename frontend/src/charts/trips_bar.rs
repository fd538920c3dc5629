use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{self, Trip};

const Y_MAX: u32 = 110;
const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 260;
const MARGIN: u32 = 10;

/// Fill alpha for a bar. The winner is brighter; with nothing hovered the
/// winner stays highlighted, otherwise only the hovered bar is.
pub fn bar_alpha(trip: &Trip, active: Option<usize>, index: usize) -> f64 {
    let fill = if trip.rank == 1 { 0.92 } else { 0.55 };
    let lit = match active {
        Some(a) => a == index,
        None => trip.rank == 1,
    };
    fill * if lit { 1.0 } else { 0.55 }
}

/// Bar under a horizontal offset on a canvas drawn `width` pixels wide.
pub fn bar_at(offset_x: f64, width: f64, count: usize) -> Option<usize> {
    if count == 0 || width <= 0.0 {
        return None;
    }
    let margin = MARGIN as f64 * width / CANVAS_WIDTH as f64;
    let inner = width - 2.0 * margin;
    let x = offset_x - margin;
    if x < 0.0 || x >= inner {
        return None;
    }
    Some(((x / inner) * count as f64).floor() as usize).filter(|i| *i < count)
}

fn draw(canvas: HtmlCanvasElement, trips: &[Trip], active: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(Some(ctx)) = canvas.get_context("2d") {
        if let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    }

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .x_label_area_size(28)
        .build_cartesian_2d((0..trips.len()).into_segmented(), 0u32..Y_MAX)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .axis_style(WHITE.mix(0.0))
        .x_label_style(("sans-serif", 13).into_font().color(&WHITE.mix(0.75)))
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => trips.get(*i).map(|t| t.name.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    for (i, trip) in trips.iter().enumerate() {
        let alpha = bar_alpha(trip, active, i);
        chart.draw_series(
            Histogram::vertical(&chart)
                .style(WHITE.mix(alpha).filled())
                .margin(22)
                .data(std::iter::once((i, trip.value))),
        )?;
    }

    root.present()?;
    Ok(())
}

#[function_component]
pub fn TripsBar() -> Html {
    let canvas_ref = use_node_ref();
    let active = use_state(|| None::<usize>);
    let content = content::content();

    {
        let canvas_ref = canvas_ref.clone();
        let content = content.clone();
        use_effect_with_deps(
            move |active| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(CANVAS_WIDTH);
                    canvas.set_height(CANVAS_HEIGHT);
                    if let Err(e) = draw(canvas, &content.trips, *active) {
                        log::warn!("Trips chart failed to draw: {}", e);
                    }
                }
                || ()
            },
            *active,
        );
    }

    let onmousemove = {
        let active = active.clone();
        let canvas_ref = canvas_ref.clone();
        let count = content.trips.len();
        Callback::from(move |e: MouseEvent| {
            let width = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|c| c.client_width() as f64)
                .unwrap_or(CANVAS_WIDTH as f64);
            let hovered = bar_at(e.offset_x() as f64, width, count);
            if *active != hovered {
                active.set(hovered);
            }
        })
    };

    let onmouseleave = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(None))
    };

    let tooltip = (*active).and_then(|i| content.trips.get(i)).map(|trip| {
        html! {
            <div class="trips-tooltip">
                <div class="trips-tooltip-title">{format!("{} {}", trip.medal(), trip.name)}</div>
                <div class="trips-tooltip-note">{trip.note.clone()}</div>
            </div>
        }
    });

    let winner = content.trips.iter().find(|t| t.rank == 1).map(|t| t.name.clone()).unwrap_or_default();

    html! {
        <Reveal>
            <div class="glass-card trips-card">
                <style>
                    {r#"
                    .trips-card { position: relative; }
                    .trips-header {
                        display: flex;
                        align-items: baseline;
                        justify-content: space-between;
                        gap: 12px;
                    }
                    .trips-tooltip {
                        position: absolute;
                        top: 80px;
                        right: 20px;
                        padding: 8px 12px;
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(15, 18, 32, 0.96);
                        font-size: 12px;
                        box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
                        pointer-events: none;
                    }
                    .trips-tooltip-title { font-weight: 600; color: white; }
                    .trips-tooltip-note { margin-top: 4px; color: rgba(255, 255, 255, 0.7); }
                    .trips-legend {
                        margin-top: 16px;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 8px;
                        font-size: 14px;
                    }
                    .trips-pill {
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(255, 255, 255, 0.1);
                        padding: 4px 12px;
                    }
                    "#}
                </style>
                <div class="trips-header">
                    <div>
                        <div class="eyebrow">{"Путешествия 🧳"}</div>
                        <div class="card-title">{"Топ-3 поездки года"}</div>
                    </div>
                    <div class="muted small">{"(мой личный топ ❤️)"}</div>
                </div>
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_WIDTH.to_string()}
                    height={CANVAS_HEIGHT.to_string()}
                    style="width: 100%; height: 260px; margin-top: 16px;"
                    {onmousemove}
                    {onmouseleave}
                />
                { tooltip.unwrap_or_default() }
                <div class="trips-legend">
                    <span class="trips-pill">{format!("🥇 {} — на первом месте", winner)}</span>
                    <span class="muted">{"(Ты знаешь что в следующем году 😜)"}</span>
                </div>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(rank: u8) -> Trip {
        Trip {
            name: format!("trip {}", rank),
            value: 50,
            rank,
            note: String::new(),
        }
    }

    #[test]
    fn test_winner_is_lit_by_default() {
        assert!((bar_alpha(&trip(1), None, 1) - 0.92).abs() < 1e-9);
        assert!((bar_alpha(&trip(2), None, 0) - 0.55 * 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_hover_moves_highlight() {
        assert!((bar_alpha(&trip(2), Some(0), 0) - 0.55).abs() < 1e-9);
        assert!((bar_alpha(&trip(1), Some(0), 1) - 0.92 * 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_bar_at_splits_inner_width() {
        let w = CANVAS_WIDTH as f64;
        assert_eq!(bar_at(5.0, w, 3), None);
        assert_eq!(bar_at(20.0, w, 3), Some(0));
        assert_eq!(bar_at(w / 2.0, w, 3), Some(1));
        assert_eq!(bar_at(w - 20.0, w, 3), Some(2));
        assert_eq!(bar_at(w - 2.0, w, 3), None);
        assert_eq!(bar_at(100.0, w, 0), None);
    }
}

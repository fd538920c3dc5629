use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::{self, Bar};

const Y_MAX: u32 = 2200;
const CANVAS_WIDTH: u32 = 520;
const CANVAS_HEIGHT: u32 = 180;

fn draw(canvas: HtmlCanvasElement, bars: &[Bar]) -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(Some(ctx)) = canvas.get_context("2d") {
        if let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    }

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();

    let label_font = ("sans-serif", 12).into_font().color(&WHITE.mix(0.7));
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(40)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0u32..Y_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(5)
        .axis_style(WHITE.mix(0.25))
        .x_label_style(label_font.clone())
        .y_label_style(label_font)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => bars.get(*i).map(|b| b.name.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(WHITE.mix(0.85).filled())
            .margin(24)
            .data(bars.iter().enumerate().map(|(i, b)| (i, b.value))),
    )?;

    let value_font = ("sans-serif", 12)
        .into_font()
        .color(&WHITE.mix(0.85))
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bars.iter().enumerate().map(|(i, b)| {
        Text::new(
            b.value.to_string(),
            (SegmentValue::CenterOf(i), b.value.saturating_add(20).min(Y_MAX)),
            value_font.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// "How many times happier" bar chart from the third question.
#[function_component]
pub fn HappinessBar() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    canvas.set_width(CANVAS_WIDTH);
                    canvas.set_height(CANVAS_HEIGHT);
                    if let Err(e) = draw(canvas, &content::content().happiness) {
                        log::warn!("Happiness chart failed to draw: {}", e);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="happiness-bar">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                style="width: 100%; height: 180px;"
            />
        </div>
    }
}

use yew::prelude::*;

use crate::components::cards::MiniStat;
use crate::components::reveal::Reveal;
use crate::config;
use crate::geo::{arc_points, format_km, haversine_km};
use crate::map::tile_map::{MapMarker, MapRoute, TileMap};

const ARC_STEPS: usize = 70;

/// Rounded leg lengths, Angarsk to Brno and Astana to Brno.
pub fn leg_distances() -> (i64, i64) {
    (
        haversine_km(config::ANGARSK, config::BRNO).round() as i64,
        haversine_km(config::ASTANA, config::BRNO).round() as i64,
    )
}

#[function_component]
pub fn MeetMap() -> Html {
    let (km_a, km_b) = leg_distances();
    let total = km_a + km_b;

    let markers = use_memo(
        |_| {
            vec![
                MapMarker { position: config::ANGARSK, label: "Ангарск 🧳".into() },
                MapMarker { position: config::ASTANA, label: "Астана 🌙".into() },
                MapMarker { position: config::BRNO, label: "Брно ❤️".into() },
            ]
        },
        (),
    );
    let routes = use_memo(
        |_| {
            vec![
                MapRoute {
                    points: arc_points(config::ANGARSK, config::BRNO, ARC_STEPS, 0.22),
                    weight: 5.0,
                    opacity: 0.95,
                },
                MapRoute {
                    points: arc_points(config::ASTANA, config::BRNO, ARC_STEPS, 0.14),
                    weight: 5.0,
                    opacity: 0.65,
                },
            ]
        },
        (),
    );

    html! {
        <Reveal>
            <section class="glass-card meet-map">
                <style>
                    {r#"
                    .meet-map .meet-header {
                        display: flex;
                        align-items: baseline;
                        justify-content: space-between;
                        gap: 12px;
                    }
                    .meet-map .meet-total { font-size: 12px; color: rgba(255, 255, 255, 0.7); }
                    .meet-map .meet-total b { color: white; }
                    .meet-map .map-frame {
                        margin-top: 16px;
                        overflow: hidden;
                        border-radius: 16px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .meet-map .mini-stats {
                        margin-top: 16px;
                        display: grid;
                        gap: 8px;
                        grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    }
                    "#}
                </style>
                <div class="meet-header">
                    <div>
                        <div class="eyebrow">{"Путь к нашей встрече ✈️"}</div>
                        <h3 class="card-title">{"Ангарск + Астана → Брно"}</h3>
                    </div>
                    <div class="meet-total">
                        {"всего ≈ "}<b>{format!("{} км", format_km(total))}</b>
                    </div>
                </div>
                <div class="map-frame">
                    <TileMap
                        center={config::MEET_MAP_CENTER}
                        zoom={config::MEET_MAP_ZOOM}
                        height={360}
                        markers={(*markers).clone()}
                        routes={(*routes).clone()}
                        scroll_wheel_zoom={false}
                    />
                </div>
                <div class="mini-stats">
                    <MiniStat label="Ангарск → Брно" value={format!("≈ {} км", format_km(km_a))} emoji="🧳" />
                    <MiniStat label="Астана → Брно" value={format!("≈ {} км", format_km(km_b))} emoji="🌙" />
                    <MiniStat label="Итого до встречи" value={format!("≈ {} км", format_km(total))} emoji="❤️" />
                </div>
                <div class="muted small" style="margin-top: 12px;">{"Я думаю это не случайность."}</div>
            </section>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legs_are_continental() {
        let (a, b) = leg_distances();
        assert!(a > b);
        assert!((5_500..6_500).contains(&a), "Angarsk leg {}", a);
        assert!((3_500..4_000).contains(&b), "Astana leg {}", b);
    }
}

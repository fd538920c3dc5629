use yew::prelude::*;

use crate::config;
use crate::geo::{AnswerZone, GeoPoint};
use crate::map::tile_map::TileMap;

#[derive(Properties, PartialEq)]
pub struct CityOnMapProps {
    /// Current answer as `"lat,lng"`, empty until the first click.
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn CityOnMap(props: &CityOnMapProps) -> Html {
    let zone = AnswerZone::new(config::CITY_TARGET, config::CITY_RADIUS_KM);
    let picked = GeoPoint::parse(&props.value).ok();
    let hint = picked.map(|p| zone.proximity_hint(p));

    let on_pick = {
        let on_change = props.on_change.clone();
        Callback::from(move |p: GeoPoint| {
            gloo_console::log!("City pick:", p.to_field_value());
            on_change.emit(p.to_field_value());
        })
    };

    html! {
        <div class="city-on-map">
            <style>
                {r#"
                .city-on-map .map-card {
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 12px;
                }
                .city-on-map .map-caption {
                    margin-bottom: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 12px;
                    font-size: 12px;
                    color: rgba(255, 255, 255, 0.7);
                }
                .city-on-map .map-frame {
                    overflow: hidden;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .city-on-map .map-tip { margin-top: 12px; font-size: 12px; color: rgba(255, 255, 255, 0.6); }
                "#}
            </style>
            <p class="question-text">
                {"Найди на карте город откуда я родом (достаточно ошибки 300км от города) ❤️"}
            </p>
            <div class="map-card">
                <div class="map-caption">
                    <span>{"Кликни по карте, чтобы поставить маркер."}</span>
                    if let Some(hint) = hint {
                        <span>{hint}</span>
                    }
                </div>
                <div class="map-frame">
                    <TileMap
                        center={config::CITY_START_CENTER}
                        zoom={config::CITY_START_ZOOM}
                        height={360}
                        circle={picked}
                        on_pick={Some(on_pick)}
                    />
                </div>
                <div class="map-tip">{"Подсказка: можно приблизить карту и кликнуть точнее."}</div>
            </div>
        </div>
    }
}

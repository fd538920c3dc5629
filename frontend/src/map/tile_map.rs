use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, PointerEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::geo::GeoPoint;
use crate::map::projection::{Pixel, Viewport};

/// Movement below this many pixels between press and release is a click.
const DRAG_THRESHOLD: f64 = 3.0;
const FALLBACK_WIDTH: f64 = 600.0;

#[derive(Clone, PartialEq)]
pub struct MapMarker {
    pub position: GeoPoint,
    pub label: AttrValue,
}

#[derive(Clone, PartialEq)]
pub struct MapRoute {
    pub points: Vec<GeoPoint>,
    pub weight: f64,
    pub opacity: f64,
}

#[derive(Properties, PartialEq)]
pub struct TileMapProps {
    pub center: GeoPoint,
    pub zoom: u8,
    #[prop_or(360)]
    pub height: u32,
    #[prop_or_default]
    pub markers: Vec<MapMarker>,
    #[prop_or_default]
    pub routes: Vec<MapRoute>,
    #[prop_or_default]
    pub circle: Option<GeoPoint>,
    #[prop_or_default]
    pub on_pick: Option<Callback<GeoPoint>>,
    #[prop_or(true)]
    pub scroll_wheel_zoom: bool,
}

/// One press of a mouse button, finger or pen on the map.
#[derive(Debug, Clone, Copy)]
struct Drag {
    pointer_id: i32,
    start_x: f64,
    start_y: f64,
    start_view: Viewport,
    moved: bool,
}

impl Drag {
    fn new(pointer_id: i32, x: f64, y: f64, start_view: Viewport) -> Self {
        Drag {
            pointer_id,
            start_x: x,
            start_y: y,
            start_view,
            moved: false,
        }
    }

    /// Viewport for the pointer now at `(x, y)`, or `None` while the
    /// movement is still small enough to be a tap.
    fn track(&mut self, x: f64, y: f64) -> Option<Viewport> {
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        if !self.moved && (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD {
            self.moved = true;
        }
        self.moved.then(|| self.start_view.panned(dx, dy))
    }
}

fn polyline_points(viewport: &Viewport, points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|p| {
            let s = viewport.to_screen(*p);
            format!("{:.1},{:.1}", s.x, s.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn local_pixel(el: &Element, client_x: i32, client_y: i32) -> Pixel {
    let rect = el.get_bounding_client_rect();
    Pixel {
        x: client_x as f64 - rect.left(),
        y: client_y as f64 - rect.top(),
    }
}

#[function_component]
pub fn TileMap(props: &TileMapProps) -> Html {
    let container = use_node_ref();
    let (measured_width, _) = use_size(container.clone());
    let center = use_state(|| props.center);
    let zoom = use_state(|| props.zoom);
    let drag = use_mut_ref(|| None::<Drag>);

    let width = if measured_width > 0 {
        measured_width as f64
    } else {
        FALLBACK_WIDTH
    };
    let height = props.height as f64;
    let viewport = Viewport::new(*center, *zoom, width, height);

    // Wheel handler registered by hand: it has to be non-passive so the page
    // does not scroll while the map zooms.
    let current_view: Rc<RefCell<Viewport>> = use_mut_ref(|| viewport);
    *current_view.borrow_mut() = viewport;
    {
        let container = container.clone();
        let center = center.clone();
        let zoom = zoom.clone();
        let current_view = current_view.clone();
        use_effect_with_deps(
            move |enabled| {
                let mut listener = None;
                if let (true, Some(el)) = (*enabled, container.cast::<Element>()) {
                    let target = el.clone();
                    let callback = Closure::wrap(Box::new(move |e: WheelEvent| {
                        e.prevent_default();
                        if e.delta_y() == 0.0 {
                            return;
                        }
                        let delta = if e.delta_y() < 0.0 { 1 } else { -1 };
                        let anchor = local_pixel(&target, e.client_x(), e.client_y());
                        let next = current_view.borrow().zoomed_at(delta, anchor);
                        center.set(next.center);
                        zoom.set(next.zoom);
                    }) as Box<dyn FnMut(WheelEvent)>);
                    let mut options = AddEventListenerOptions::new();
                    options.passive(false);
                    let _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        callback.as_ref().unchecked_ref(),
                        &options,
                    );
                    listener = Some((el, callback));
                }
                move || {
                    if let Some((el, callback)) = listener {
                        let _ = el.remove_event_listener_with_callback("wheel", callback.as_ref().unchecked_ref());
                    }
                }
            },
            props.scroll_wheel_zoom,
        );
    }

    let onpointerdown = {
        let drag = drag.clone();
        let container = container.clone();
        Callback::from(move |e: PointerEvent| {
            if !e.is_primary() {
                return;
            }
            e.prevent_default();
            if let Some(el) = container.cast::<Element>() {
                let _ = el.set_pointer_capture(e.pointer_id());
            }
            *drag.borrow_mut() = Some(Drag::new(
                e.pointer_id(),
                e.client_x() as f64,
                e.client_y() as f64,
                viewport,
            ));
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let center = center.clone();
        Callback::from(move |e: PointerEvent| {
            let mut slot = drag.borrow_mut();
            let Some(state) = slot.as_mut().filter(|d| d.pointer_id == e.pointer_id()) else {
                return;
            };
            if let Some(view) = state.track(e.client_x() as f64, e.client_y() as f64) {
                center.set(view.center);
            }
        })
    };

    let onpointerup = {
        let drag = drag.clone();
        let container = container.clone();
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(state) = drag.borrow_mut().take() else {
                return;
            };
            if state.pointer_id != e.pointer_id() || state.moved {
                return;
            }
            let (Some(on_pick), Some(el)) = (on_pick.as_ref(), container.cast::<Element>()) else {
                return;
            };
            let picked = state.start_view.to_geo(local_pixel(&el, e.client_x(), e.client_y()));
            log::debug!("Map picked {:.4},{:.4}", picked.lat, picked.lng);
            on_pick.emit(picked);
        })
    };

    let onpointercancel = {
        let drag = drag.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().take();
        })
    };

    let zoom_by = |delta: i8| {
        let zoom = zoom.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            zoom.set(viewport.zoomed(delta).zoom);
        })
    };
    // Keep button presses from starting a drag or a pick underneath.
    let swallow = Callback::from(|e: PointerEvent| e.stop_propagation());

    let cursor = if props.on_pick.is_some() { "crosshair" } else { "grab" };

    html! {
        <div
            class="tile-map"
            ref={container}
            style={format!("height: {}px; cursor: {};", props.height, cursor)}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
            {onpointercancel}
        >
            <style>
                {r#"
                .tile-map {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                    background: #1a1d2b;
                    user-select: none;
                    touch-action: none;
                }
                .tile-map-tile {
                    position: absolute;
                    width: 256px;
                    height: 256px;
                    pointer-events: none;
                }
                .tile-map-overlay {
                    position: absolute;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                }
                .route-dash-anim {
                    animation: routeDash 2.4s linear infinite;
                }
                @keyframes routeDash {
                    to { stroke-dashoffset: -48; }
                }
                .tile-map-pin {
                    position: absolute;
                    width: 25px;
                    height: 41px;
                    pointer-events: auto;
                }
                .tile-map-pin-label {
                    display: none;
                    position: absolute;
                    bottom: 46px;
                    left: 50%;
                    transform: translateX(-50%);
                    white-space: nowrap;
                    background: rgba(15, 18, 32, 0.95);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    padding: 4px 8px;
                    font-size: 12px;
                    color: white;
                }
                .tile-map-pin:hover .tile-map-pin-label {
                    display: block;
                }
                .tile-map-zoom {
                    position: absolute;
                    top: 10px;
                    left: 10px;
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                }
                .tile-map-zoom button {
                    width: 30px;
                    height: 30px;
                    border-radius: 6px;
                    border: 1px solid rgba(0, 0, 0, 0.2);
                    background: white;
                    color: #111;
                    font-size: 18px;
                    cursor: pointer;
                }
                .tile-map-attribution {
                    position: absolute;
                    right: 0;
                    bottom: 0;
                    padding: 2px 6px;
                    font-size: 11px;
                    color: #333;
                    background: rgba(255, 255, 255, 0.7);
                }
                "#}
            </style>
            {
                viewport.tiles().into_iter().map(|tile| html! {
                    <img
                        key={format!("{}/{}/{}/{}", tile.zoom, tile.x, tile.y, tile.left)}
                        class="tile-map-tile"
                        src={tile.url()}
                        alt=""
                        draggable="false"
                        style={format!("left: {:.1}px; top: {:.1}px;", tile.left, tile.top)}
                    />
                }).collect::<Html>()
            }
            <svg
                class="tile-map-overlay"
                width={width.to_string()}
                height={height.to_string()}
            >
                {
                    props.routes.iter().map(|route| html! {
                        <polyline
                            class="route-dash-anim"
                            points={polyline_points(&viewport, &route.points)}
                            fill="none"
                            stroke="white"
                            stroke-width={route.weight.to_string()}
                            stroke-opacity={route.opacity.to_string()}
                            stroke-linecap="round"
                            stroke-dasharray="10 14"
                        />
                    }).collect::<Html>()
                }
                {
                    if let Some(point) = props.circle {
                        let s = viewport.to_screen(point);
                        html! {
                            <circle
                                cx={format!("{:.1}", s.x)}
                                cy={format!("{:.1}", s.y)}
                                r="10"
                                fill="white"
                                fill-opacity="0.9"
                                stroke="white"
                                stroke-width="2"
                                stroke-opacity="0.9"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </svg>
            {
                props.markers.iter().map(|marker| {
                    let s = viewport.to_screen(marker.position);
                    html! {
                        <div
                            class="tile-map-pin"
                            style={format!("left: {:.1}px; top: {:.1}px;", s.x - 12.0, s.y - 41.0)}
                        >
                            <img src={config::MARKER_ICON_URL} width="25" height="41" alt="" draggable="false" />
                            <span class="tile-map-pin-label">{marker.label.clone()}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
            <div class="tile-map-zoom" onpointerdown={swallow.clone()}>
                <button type="button" onclick={zoom_by(1)}>{"+"}</button>
                <button type="button" onclick={zoom_by(-1)}>{"−"}</button>
            </div>
            <div class="tile-map-attribution" onpointerdown={swallow}>{config::TILE_ATTRIBUTION}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_points_are_screen_pixels() {
        let vp = Viewport::new(GeoPoint { lat: 0.0, lng: 0.0 }, 1, 512.0, 512.0);
        let points = polyline_points(&vp, &[GeoPoint { lat: 0.0, lng: 0.0 }, GeoPoint { lat: 0.0, lng: 90.0 }]);
        assert_eq!(points, "256.0,256.0 384.0,256.0");
    }

    #[test]
    fn test_small_jitter_stays_a_tap() {
        let vp = Viewport::new(GeoPoint { lat: 49.1142, lng: 16.3624 }, 5, 600.0, 360.0);
        let mut drag = Drag::new(1, 100.0, 100.0, vp);
        assert!(drag.track(102.0, 101.0).is_none());
        assert!(!drag.moved);
    }

    #[test]
    fn test_finger_drag_pans_from_press_point() {
        let vp = Viewport::new(GeoPoint { lat: 49.1142, lng: 16.3624 }, 5, 600.0, 360.0);
        let mut drag = Drag::new(7, 300.0, 180.0, vp);
        let first = drag.track(260.0, 180.0).map(|v| v.center);
        assert!(drag.moved);
        assert_eq!(first, Some(vp.panned(-40.0, 0.0).center));
        assert!(first.map_or(false, |c| c.lng > vp.center.lng));

        // Once moving, even a return near the start keeps panning.
        let back = drag.track(301.0, 180.0).map(|v| v.center);
        assert_eq!(back, Some(vp.panned(1.0, 0.0).center));
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Share of the element that must be on screen before it fades in.
pub const REVEAL_AMOUNT: f64 = 0.35;

/// How much of a box starting at `top` (viewport coordinates) is visible.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return if (0.0..=viewport_height).contains(&top) { 1.0 } else { 0.0 };
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view. Once shown
/// they stay shown.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let done = *revealed;
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |done| {
                let mut listener = None;
                if let (false, Some(window)) = (*done, web_sys::window()) {
                    let check = {
                        let window = window.clone();
                        move || {
                            let Some(el) = node.cast::<Element>() else {
                                return;
                            };
                            let rect = el.get_bounding_client_rect();
                            let viewport_height = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if visible_fraction(rect.top(), rect.height(), viewport_height) >= REVEAL_AMOUNT {
                                revealed.set(true);
                            }
                        }
                    };
                    check();
                    let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    listener = Some((window, callback));
                }
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            done,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then(|| "revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_inside_viewport() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
    }

    #[test]
    fn test_partially_below_fold() {
        assert!((visible_fraction(700.0, 200.0, 800.0) - 0.5).abs() < 1e-9);
        assert!(visible_fraction(740.0, 200.0, 800.0) < REVEAL_AMOUNT);
    }

    #[test]
    fn test_scrolled_past_and_not_yet_reached() {
        assert_eq!(visible_fraction(-500.0, 200.0, 800.0), 0.0);
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
    }

    #[test]
    fn test_taller_than_viewport() {
        assert!((visible_fraction(0.0, 1600.0, 800.0) - 0.5).abs() < 1e-9);
    }
}

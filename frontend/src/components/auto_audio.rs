use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::config;
use crate::media;

/// Looping background track. Browsers may refuse to autoplay it, in which
/// case a floating button lets the visitor start it by hand.
#[function_component]
pub fn AutoAudio() -> Html {
    let audio_ref = use_node_ref();
    let blocked = use_state(|| false);

    {
        let audio_ref = audio_ref.clone();
        let blocked = blocked.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(audio) = audio_ref.cast::<HtmlMediaElement>() {
                    audio.set_volume(config::BACKGROUND_VOLUME);
                    audio.set_loop(true);
                    spawn_local(async move {
                        match media::play(&audio).await {
                            Ok(()) => blocked.set(false),
                            Err(e) => {
                                warn!("Background music did not autoplay: {}", e);
                                blocked.set(true);
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let retry = {
        let audio_ref = audio_ref.clone();
        let blocked = blocked.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            let blocked = blocked.clone();
            spawn_local(async move {
                match media::play(&audio).await {
                    Ok(()) => blocked.set(false),
                    Err(e) => warn!("Background music still blocked: {}", e),
                }
            });
        })
    };

    html! {
        <>
            <audio
                ref={audio_ref}
                src={config::BACKGROUND_TRACK}
                preload="auto"
                class="auto-audio"
            />
            if *blocked {
                <button type="button" class="music-retry" onclick={retry}>
                    {"🔊 Включить музыку"}
                </button>
            }
        </>
    }
}

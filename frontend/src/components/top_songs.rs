use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::content;

const AUTOPLAY_BLOCKED: &str = "Браузер мог заблокировать автозапуск. Нажми Play или нажми на песню ещё раз.";
const PLAYBACK_FAILED: &str = "Не удалось воспроизвести аудио.";

#[derive(Properties, PartialEq)]
pub struct TopSongsProps {
    /// Id of the selected song, empty when nothing is picked yet.
    pub value: AttrValue,
    pub on_select: Callback<String>,
}

/// Song picker with a shared player. Picking a song selects it and plays it
/// from the start.
#[function_component]
pub fn TopSongs(props: &TopSongsProps) -> Html {
    let audio_ref = use_node_ref();
    let playing = use_state(|| false);
    let error = use_state(|| None::<&'static str>);
    let songs = content::content();

    let current = songs.songs.iter().find(|s| s.id.as_str() == props.value.as_str()).cloned();

    let song_buttons = songs.songs.iter().map(|song| {
        let selected = song.id.as_str() == props.value.as_str();
        let onclick = {
            let on_select = props.on_select.clone();
            let audio_ref = audio_ref.clone();
            let playing = playing.clone();
            let error = error.clone();
            let id = song.id.clone();
            let src = song.src.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                error.set(None);
                on_select.emit(id.clone());
                let Some(audio) = audio_ref.cast::<HtmlMediaElement>() else {
                    return;
                };
                let playing = playing.clone();
                let error = error.clone();
                let src = src.clone();
                spawn_local(async move {
                    match crate::media::play_from_start(&audio, &src).await {
                        Ok(()) => playing.set(true),
                        Err(e) => {
                            warn!("Song playback rejected: {}", e);
                            playing.set(false);
                            error.set(Some(AUTOPLAY_BLOCKED));
                        }
                    }
                });
            })
        };
        html! {
            <button
                type="button"
                key={song.id.clone()}
                class={classes!("song", selected.then(|| "selected"))}
                {onclick}
            >
                <div class="song-meta">
                    <div class="song-title">{song.title.clone()}</div>
                    <div class="song-artist">{song.artist.clone()}</div>
                </div>
                <div class="song-state">{ if selected { "selected" } else { "pick" } }</div>
            </button>
        }
    });

    let toggle = {
        let audio_ref = audio_ref.clone();
        let playing = playing.clone();
        let error = error.clone();
        let has_song = current.is_some();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(audio) = audio_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            if !has_song {
                return;
            }
            error.set(None);
            if audio.paused() {
                let playing = playing.clone();
                let error = error.clone();
                spawn_local(async move {
                    match crate::media::play(&audio).await {
                        Ok(()) => playing.set(true),
                        Err(e) => {
                            warn!("Resume failed: {}", e);
                            error.set(Some(PLAYBACK_FAILED));
                        }
                    }
                });
            } else if let Err(e) = audio.pause() {
                debug!("Pause failed: {:?}", e);
                error.set(Some(PLAYBACK_FAILED));
            } else {
                playing.set(false);
            }
        })
    };

    let onplay = {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(true))
    };
    let onpause = {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(false))
    };
    let onended = {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(false))
    };

    html! {
        <div class="top-songs">
            <style>
                {r#"
                .top-songs .song-list { display: grid; gap: 8px; }
                .top-songs .song {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: white;
                    padding: 12px 16px;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease, opacity 0.2s ease;
                }
                .top-songs .song:hover { background: rgba(255, 255, 255, 0.1); }
                .top-songs .song.selected {
                    border-color: rgba(255, 255, 255, 0.5);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                }
                .top-songs .song-meta { min-width: 0; }
                .top-songs .song-title { font-size: 14px; font-weight: 600; }
                .top-songs .song-artist { font-size: 12px; color: rgba(255, 255, 255, 0.7); }
                .top-songs .song-state { margin-left: 12px; font-size: 11px; color: rgba(255, 255, 255, 0.6); }
                .top-songs .player {
                    margin-top: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 12px;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 12px 16px;
                }
                .top-songs .player button {
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                    padding: 8px 16px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .top-songs .player button:disabled {
                    cursor: not-allowed;
                    color: rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.05);
                }
                .top-songs .player-error {
                    margin-top: 12px;
                    border-radius: 12px;
                    border: 1px solid rgba(239, 68, 68, 0.3);
                    background: rgba(239, 68, 68, 0.1);
                    padding: 12px 16px;
                    font-size: 12px;
                    color: #fee2e2;
                }
                "#}
            </style>
            <p class="question-text">
                {"Какая песня от тебя звучала у меня чаще всего в этом году? (можешь послушать песни нажав на них) ❤️"}
            </p>
            <div class="song-list">
                { for song_buttons }
            </div>
            <div class="player">
                <div>
                    <div class="song-artist">{"Играет"}</div>
                    <div class="song-title">
                        { current.as_ref().map(|s| s.title.clone()).unwrap_or_else(|| "—".to_string()) }
                    </div>
                </div>
                <button type="button" onclick={toggle} disabled={current.is_none()}>
                    { if *playing { "Pause" } else { "Play" } }
                </button>
            </div>
            if let Some(message) = *error {
                <div class="player-error">{message}</div>
            }
            <audio ref={audio_ref} style="display: none;" {onplay} {onpause} {onended} />
        </div>
    }
}

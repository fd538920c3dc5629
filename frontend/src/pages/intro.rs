use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::unlock;
use crate::Route;

/// Length of the slide-out before moving on to the quiz.
const LEAVE_MS: u32 = 350;

#[function_component]
pub fn Intro() -> Html {
    let navigator = use_navigator();
    let leaving = use_state(|| false);
    let unlocked = use_state(unlock::is_unlocked);

    let start = {
        let leaving = leaving.clone();
        Callback::from(move |_: MouseEvent| {
            if *leaving {
                return;
            }
            leaving.set(true);
            let navigator = navigator.clone();
            Timeout::new(LEAVE_MS, move || {
                info!("Intro finished, opening quiz");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Quiz);
                }
            })
            .forget();
        })
    };

    html! {
        <main class="intro-page">
            <style>
                {r#"
                .intro-page {
                    min-height: 100vh;
                    display: grid;
                    place-items: center;
                    padding: 0 16px;
                    background: linear-gradient(to bottom, #0b0b10, #0f1220);
                    color: white;
                }
                .intro-card {
                    width: 100%;
                    max-width: 560px;
                    text-align: center;
                    transition: transform 0.3s ease-in-out, opacity 0.3s ease-in-out;
                }
                .intro-card.leaving { transform: translateX(-100%); opacity: 0; }
                .intro-kicker {
                    font-size: 11px;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    opacity: 0.7;
                }
                .intro-card h1 {
                    margin-top: 20px;
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.2;
                    letter-spacing: -0.02em;
                }
                .intro-card p { margin-top: 24px; font-size: 1.1rem; line-height: 1.6; opacity: 0.85; }
                .intro-start {
                    margin-top: 32px;
                    padding: 12px 24px;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.85);
                    color: rgba(0, 0, 0, 0.9);
                    font-weight: 800;
                    text-transform: uppercase;
                    letter-spacing: 0.04em;
                    cursor: pointer;
                }
                .intro-start:disabled { opacity: 0.6; }
                .intro-footnote { margin-top: 16px; font-size: 12px; opacity: 0.6; }
                .intro-footnote a { color: white; }
                "#}
            </style>
            <div class={classes!("intro-card", (*leaving).then(|| "leaving"))}>
                <div class="intro-kicker">{"Для жан"}</div>
                <h1>
                    {"Это был лучший год,"}<br/>
                    {"который подарила"}<br/>
                    {"мне именно"}<br/>
                    <span>{"ты"}</span>{" ❤️"}
                </h1>
                <p>
                    {"За все то что было за эти полгода"}<br/>
                    {"я решил сделать для тебя"}<br/>
                    {"этот маленький подарок."}<br/><br/>
                    {"Но прежде чем ты его увидишь,"}<br/>
                    {"я хочу задать тебе"}<br/>
                    {"всего пару маленьких вопросов."}<br/>
                    <b>{"Ты готова?"}</b>
                </p>
                <button class="intro-start" onclick={start} disabled={*leaving}>
                    {"Искать подарок 🤩"}
                </button>
                <div class="intro-footnote">{"Обещаю, это будет быстро и мило 😅"}</div>
                if *unlocked {
                    <div class="intro-footnote">
                        <Link<Route> to={Route::Gift}>{"Подарок уже открыт, перейти к нему ✨"}</Link<Route>>
                    </div>
                }
            </div>
        </main>
    }
}

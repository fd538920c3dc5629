use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::charts::happiness_bar::HappinessBar;
use crate::components::city_on_map::CityOnMap;
use crate::components::top_songs::TopSongs;
use crate::content;
use crate::quiz::{self, Field, QuizAction, QuizState};
use crate::unlock;
use crate::Route;

/// Duration of each half of the step transition.
const PANEL_MS: u32 = 220;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAnim {
    Idle,
    OutLeft,
    OutRight,
    In,
}

impl PanelAnim {
    pub fn style(self) -> &'static str {
        match self {
            PanelAnim::OutLeft => {
                "transition: transform 220ms ease, opacity 220ms ease; transform: translateX(-24px); opacity: 0;"
            }
            PanelAnim::OutRight => {
                "transition: transform 220ms ease, opacity 220ms ease; transform: translateX(24px); opacity: 0;"
            }
            PanelAnim::In | PanelAnim::Idle => {
                "transition: transform 220ms ease, opacity 220ms ease; transform: translateX(0px); opacity: 1;"
            }
        }
    }

    pub fn is_moving(self) -> bool {
        matches!(self, PanelAnim::OutLeft | PanelAnim::OutRight)
    }
}

/// Slides the panel out, runs `action` while it is hidden, then slides back in.
fn run_transition(anim: UseStateHandle<PanelAnim>, out: PanelAnim, action: impl FnOnce() + 'static) {
    anim.set(out);
    Timeout::new(PANEL_MS, move || {
        action();
        anim.set(PanelAnim::In);
        Timeout::new(PANEL_MS, move || anim.set(PanelAnim::Idle)).forget();
    })
    .forget();
}

/// Moves to the next step when the current answer passes, otherwise shows
/// its error. A transition already in flight wins.
fn advance(state: &UseReducerHandle<QuizState>, anim: &UseStateHandle<PanelAnim>) {
    if anim.is_moving() {
        return;
    }
    if quiz::validate(state.current_field(), state.answers()).is_err() {
        state.dispatch(QuizAction::Validate);
        return;
    }
    let state = state.clone();
    run_transition(anim.clone(), PanelAnim::OutLeft, move || state.dispatch(QuizAction::Next));
}

fn error_line(state: &QuizState, field: Field) -> Html {
    match state.error(field) {
        Some(e) => html! { <div class="quiz-error">{e.to_string()}</div> },
        None => html! {},
    }
}

fn text_input(state: &UseReducerHandle<QuizState>, field: Field, placeholder: &'static str) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(QuizAction::Answer(field, input.value()));
        })
    };
    let onblur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| state.dispatch(QuizAction::Validate))
    };
    html! {
        <input
            class="quiz-input"
            type="text"
            {placeholder}
            value={state.answers().get(field).to_string()}
            {oninput}
            {onblur}
        />
    }
}

fn first_date_step(state: &UseReducerHandle<QuizState>) -> Html {
    let options = content::content();
    let chosen = state.answers().get(Field::Q1).to_string();
    html! {
        <div>
            <p class="question-text">{"Где было наше первое свидание? ❤️"}</p>
            <div class="choice-list">
                { for options.first_date_options.iter().map(|opt| {
                    let selected = chosen == opt.value;
                    let onclick = {
                        let state = state.clone();
                        let value = opt.value.clone();
                        Callback::from(move |_: MouseEvent| state.dispatch(QuizAction::Answer(Field::Q1, value.clone())))
                    };
                    html! {
                        <label key={opt.value.clone()} class={classes!("choice", selected.then(|| "selected"))} {onclick}>
                            <span class="choice-dot"><span /></span>
                            <span>{opt.label.clone()}</span>
                            <input type="radio" name="q1" value={opt.value.clone()} checked={selected} style="display: none;" />
                        </label>
                    }
                }) }
            </div>
            { error_line(state, Field::Q1) }
        </div>
    }
}

fn age_step(state: &UseReducerHandle<QuizState>) -> Html {
    html! {
        <div>
            <p class="question-text">{"Сколько мне лет? ✨"}</p>
            { text_input(state, Field::Q2, "Например: 43 😄") }
            { error_line(state, Field::Q2) }
            if state.answers().get(Field::Q2).is_empty() {
                <div class="quiz-hint">{"Подсказка: меньше 45 ❤️"}</div>
            }
        </div>
    }
}

fn happiness_step(state: &UseReducerHandle<QuizState>) -> Html {
    html! {
        <div>
            <p class="question-text">{"Во сколько раз я стал счастливее с тобой? ❤️"}</p>
            <HappinessBar />
            <div style="margin-top: 16px;">
                { text_input(state, Field::Q3, "во сколько раз?") }
            </div>
            { error_line(state, Field::Q3) }
        </div>
    }
}

fn song_step(state: &UseReducerHandle<QuizState>) -> Html {
    let on_select = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(QuizAction::Answer(Field::Q4, id)))
    };
    html! {
        <div>
            <TopSongs value={state.answers().get(Field::Q4).to_string()} {on_select} />
            { error_line(state, Field::Q4) }
        </div>
    }
}

fn city_step(state: &UseReducerHandle<QuizState>) -> Html {
    let on_change = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(QuizAction::Answer(Field::Q5, value)))
    };
    html! {
        <div>
            <CityOnMap value={state.answers().get(Field::Q5).to_string()} {on_change} />
            { error_line(state, Field::Q5) }
        </div>
    }
}

#[function_component]
pub fn Quiz() -> Html {
    let state = use_reducer(QuizState::default);
    let anim = use_state(|| PanelAnim::Idle);
    let navigator = use_navigator();

    let on_next = {
        let state = state.clone();
        let anim = anim.clone();
        Callback::from(move |_: MouseEvent| advance(&state, &anim))
    };

    let on_prev = {
        let state = state.clone();
        let anim = anim.clone();
        Callback::from(move |_: MouseEvent| {
            if anim.is_moving() || state.is_first() {
                return;
            }
            let state = state.clone();
            run_transition(anim.clone(), PanelAnim::OutRight, move || state.dispatch(QuizAction::Prev));
        })
    };

    let on_submit = {
        let state = state.clone();
        let anim = anim.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Enter in a text field submits the form on any step.
            if !state.is_last() {
                advance(&state, &anim);
                return;
            }
            state.dispatch(QuizAction::Submit);
            if quiz::validate_all(state.answers()).is_err() {
                return;
            }
            if let Err(e) = unlock::mark_unlocked() {
                error!("Could not store unlock marker: {}", e);
            }
            info!("Quiz passed, opening gift");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Gift);
            }
        })
    };

    let body = match state.current_field() {
        Field::Q1 => first_date_step(&state),
        Field::Q2 => age_step(&state),
        Field::Q3 => happiness_step(&state),
        Field::Q4 => song_step(&state),
        Field::Q5 => city_step(&state),
    };

    let percent = state.progress_percent();

    html! {
        <main class="quiz-page">
            <style>
                {r#"
                .quiz-page {
                    min-height: 100vh;
                    display: grid;
                    place-items: center;
                    padding: 16px;
                    background: linear-gradient(to bottom, #0b0b10, #0f1220);
                    color: white;
                }
                .quiz-card {
                    width: 100%;
                    max-width: 560px;
                    border-radius: 16px;
                    padding: 20px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
                    backdrop-filter: blur(8px);
                }
                .quiz-progress { display: flex; align-items: center; gap: 12px; font-size: 13px; }
                .quiz-progress span { opacity: 0.85; }
                .quiz-track {
                    position: relative;
                    height: 10px;
                    flex: 1;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .quiz-fill {
                    height: 100%;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.85);
                    transition: width 0.2s ease-out;
                }
                .quiz-panel { margin-top: 16px; will-change: transform, opacity; }
                .quiz-panel h1 { margin: 0; font-size: 1.25rem; font-weight: 600; }
                .question-text { margin: 8px 0 16px; opacity: 0.85; line-height: 1.6; }
                .choice-list { display: grid; gap: 10px; }
                .choice {
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    padding: 12px;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                    user-select: none;
                }
                .choice.selected { background: rgba(255, 255, 255, 0.1); }
                .choice-dot {
                    width: 18px;
                    height: 18px;
                    border-radius: 50%;
                    border: 2px solid rgba(255, 255, 255, 0.75);
                    display: grid;
                    place-items: center;
                }
                .choice-dot span { width: 10px; height: 10px; border-radius: 50%; transition: background 0.15s; }
                .choice.selected .choice-dot span { background: rgba(255, 255, 255, 0.9); }
                .quiz-input {
                    width: 100%;
                    box-sizing: border-box;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.15);
                    color: white;
                    padding: 12px;
                    font-size: 15px;
                    outline: none;
                }
                .quiz-input:focus { border-color: rgba(255, 255, 255, 0.3); }
                .quiz-error { margin-top: 10px; font-size: 13px; color: rgba(255, 180, 180, 0.95); }
                .quiz-hint { margin-top: 8px; font-size: 12px; opacity: 0.65; }
                .quiz-controls { margin-top: 20px; display: flex; gap: 10px; justify-content: space-between; }
                .quiz-controls button {
                    padding: 10px 12px;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    cursor: pointer;
                }
                .quiz-back { min-width: 110px; background: rgba(0, 0, 0, 0.2); color: white; }
                .quiz-back:disabled { background: rgba(255, 255, 255, 0.05); opacity: 0.6; cursor: not-allowed; }
                .quiz-forward {
                    min-width: 160px;
                    background: rgba(255, 255, 255, 0.85);
                    color: rgba(0, 0, 0, 0.9);
                    font-weight: 600;
                }
                .quiz-footer { margin-top: 8px; font-size: 12px; opacity: 0.6; text-align: center; }
                "#}
            </style>
            <div class="quiz-card">
                <div class="quiz-progress">
                    <span>{format!("{}/{}", state.step() + 1, state.total())}</span>
                    <div class="quiz-track" aria-label="progress">
                        <div class="quiz-fill" style={format!("width: {}%;", percent)} />
                    </div>
                    <span>{format!("{}%", percent)}</span>
                </div>
                <form onsubmit={on_submit}>
                    <div class="quiz-panel" style={anim.style()}>
                        <h1>{state.current_field().title()}</h1>
                        { body }
                    </div>
                    <div class="quiz-controls">
                        <button type="button" class="quiz-back" onclick={on_prev} disabled={state.is_first()}>
                            {"Назад"}
                        </button>
                        if state.is_last() {
                            <button type="submit" class="quiz-forward">{"Открыть подарок ✨"}</button>
                        } else {
                            <button type="button" class="quiz-forward" onclick={on_next}>{"Далее →"}</button>
                        }
                    </div>
                    <div class="quiz-footer">
                        {"Все неправильные ответы соханяются 👀"}<br/>
                        {"(шутка… наверное 😄)"}
                    </div>
                </form>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_hidden_only_while_sliding_out() {
        assert!(PanelAnim::OutLeft.style().contains("opacity: 0;"));
        assert!(PanelAnim::OutRight.style().contains("translateX(24px)"));
        assert!(PanelAnim::In.style().contains("opacity: 1;"));
        assert_eq!(PanelAnim::Idle.style(), PanelAnim::In.style());
    }

    #[test]
    fn test_moving_blocks_new_transitions() {
        assert!(PanelAnim::OutLeft.is_moving());
        assert!(PanelAnim::OutRight.is_moving());
        assert!(!PanelAnim::In.is_moving());
        assert!(!PanelAnim::Idle.is_moving());
    }
}

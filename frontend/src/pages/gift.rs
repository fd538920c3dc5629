use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::charts::trips_bar::TripsBar;
use crate::components::auto_audio::AutoAudio;
use crate::components::cards::StatCard;
use crate::components::meet_map::MeetMap;
use crate::components::reveal::Reveal;
use crate::components::together_timer::TogetherTimer;
use crate::content;
use crate::crossfade::{self, LayerStyle};

const GRAIN: &str = "url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='120' height='120'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='.8' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='120' height='120' filter='url(%23n)' opacity='.35'/%3E%3C/svg%3E\")";

fn document_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

#[function_component]
pub fn Gift() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let content = content::content();

    let progress = crossfade::scroll_progress(scroll_y, document_height(), viewport_height);
    let layers = crossfade::layer_styles(progress, content.photos.len());
    let dim = crossfade::dim_opacity(progress);

    {
        let photos = content.photos.len();
        use_effect_with_deps(
            move |_| {
                debug!("Gift page mounted with {} background photos", photos);
                || ()
            },
            (),
        );
    }

    html! {
        <main class="gift-page">
            <style>
                {r#"
                .gift-page {
                    position: relative;
                    min-height: 100vh;
                    background: #0b0b10;
                    color: white;
                }
                .gift-backdrop { pointer-events: none; position: fixed; inset: 0; overflow: hidden; }
                .gift-layer { position: absolute; inset: 0; will-change: opacity, transform; }
                .gift-photo { position: absolute; inset: 0; background-size: cover; background-position: center; }
                .gift-dim {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.8));
                }
                .gift-grain { position: absolute; inset: 0; opacity: 0.08; mix-blend-mode: overlay; }
                .gift-content {
                    position: relative;
                    z-index: 10;
                    margin: 0 auto;
                    width: 100%;
                    max-width: 820px;
                    padding: 0 16px;
                    box-sizing: border-box;
                }
                .gift-hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
                .gift-hero h1 {
                    font-size: 3rem;
                    font-weight: 800;
                    letter-spacing: -0.02em;
                    animation: gift-rise 0.8s ease-out both;
                }
                .gift-hero p {
                    margin-top: 16px;
                    max-width: 52ch;
                    color: rgba(255, 255, 255, 0.8);
                    line-height: 1.6;
                    animation: gift-rise 0.8s ease-out 0.1s both;
                }
                .gift-scroll-hint {
                    margin-top: 40px;
                    font-size: 14px;
                    color: rgba(255, 255, 255, 0.6);
                    animation: gift-fade 0.5s ease-out 0.45s both;
                }
                @keyframes gift-rise {
                    from { opacity: 0; transform: translateY(18px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes gift-fade { from { opacity: 0; } to { opacity: 1; } }
                .gift-stats-title { font-size: 1.25rem; font-weight: 600; }
                .gift-stats { margin-top: 16px; display: grid; gap: 12px; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
                .gift-section { padding: 64px 0; }
                .gift-moment { padding-top: 64px; font-size: 1.75rem; font-weight: 800; line-height: 1.25; }
                .gift-moment span { display: block; margin-top: 8px; color: rgba(255, 255, 255, 0.85); }
                .gift-finale { padding-top: 96px; padding-bottom: 80px; }
                .gift-finale .glass-card { border-radius: 24px; padding: 32px; }
                .gift-finale-lead { margin-top: 12px; font-size: 1.75rem; font-weight: 800; line-height: 1.25; }
                .gift-finale-text { margin-top: 16px; color: rgba(255, 255, 255, 0.85); line-height: 1.6; }
                .gift-finale-love { display: block; margin-top: 12px; color: white; font-size: 1.5rem; font-weight: 800; }
                .together-timer {
                    margin-top: 24px;
                    display: grid;
                    gap: 12px;
                    grid-template-columns: repeat(4, minmax(0, 1fr));
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(18px);
                    filter: blur(8px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out, filter 0.7s ease-out;
                }
                .reveal.revealed { opacity: 1; transform: translateY(0); filter: blur(0); }
                .glass-card {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 20px;
                    backdrop-filter: blur(12px);
                    box-shadow: 0 12px 40px rgba(0, 0, 0, 0.35);
                }
                .eyebrow { font-size: 12px; text-transform: uppercase; letter-spacing: 0.04em; color: rgba(255, 255, 255, 0.6); }
                .card-title { margin: 4px 0 0; font-size: 1.125rem; font-weight: 600; }
                .muted { color: rgba(255, 255, 255, 0.7); }
                .small { font-size: 12px; }
                .music-retry {
                    position: fixed;
                    right: 16px;
                    bottom: 16px;
                    z-index: 50;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.6);
                    color: white;
                    padding: 10px 16px;
                    font-size: 14px;
                    backdrop-filter: blur(8px);
                    cursor: pointer;
                }
                "#}
            </style>

            <div class="gift-backdrop">
                { for content.photos.iter().zip(layers.iter()).map(|(src, style): (&String, &LayerStyle)| html! {
                    <div key={src.clone()} class="gift-layer" style={style.to_css()}>
                        <div class="gift-photo" style={format!("background-image: url({});", src)} />
                    </div>
                }) }
                <div class="gift-dim" style={format!("opacity: {:.4};", dim)} />
                <div class="gift-grain" style={format!("background-image: {};", GRAIN)} />
            </div>

            <div class="gift-content">
                <section class="gift-hero">
                    <h1>{"Наш первый год вместе ✨"}</h1>
                    <p>{"Жан, ты сделала для меня этот год и вот немного о тебе, обо мне и о нас ❤️"}</p>
                    <div class="gift-scroll-hint">{"↓ листай"}</div>
                </section>

                <section>
                    <Reveal>
                        <h2 class="gift-stats-title">{"мы в статистике"}</h2>
                    </Reveal>
                    <div class="gift-stats">
                        { for content.stats.iter().map(|s| html! {
                            <Reveal key={s.label.clone()}>
                                <StatCard
                                    label={s.label.clone()}
                                    value={s.value.clone()}
                                    sub={s.sub.clone().map(AttrValue::from)}
                                />
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="gift-section">
                    <TripsBar />
                </section>

                <section class="gift-section">
                    <MeetMap />
                </section>

                <section>
                    <Reveal>
                        <div class="gift-moment">
                            {"Иногда мы можем спорить и не соглашаться, но среди всего мира я всегда знаю одно:"}
                            <span>{"«я люблю тебя и всегда буду выбирать только тебя»"}</span>
                        </div>
                    </Reveal>
                </section>

                <section class="gift-finale">
                    <Reveal>
                        <div class="glass-card">
                            <div class="eyebrow">{"финал"}</div>
                            <div class="gift-finale-lead">
                                {"Этот год был самым счастливым из тех, что я помню: яркий, насыщенный, полный событий. И всё благодаря тебе."}
                            </div>
                            <div class="gift-finale-text">
                                {"Я всегда от чистого сердца говорил тебе и буду говорить всегда:"}
                                <span class="gift-finale-love">{"Я ТЕБЯ ЛЮБЛЮ ❤️"}</span>
                            </div>
                            <div class="gift-finale-text" style="margin-top: 32px;">
                                {"Давай вместе писать маленькую историю о девочке, которая случайно поехала подавать документы, и о мальчике, который опаздывал на свой трамвай. Историю, которая идёт уже:"}
                            </div>
                            <TogetherTimer />
                        </div>
                    </Reveal>
                </section>
            </div>

            <AutoAudio />
        </main>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod crossfade;
mod error;
mod geo;
mod media;
mod quiz;
mod unlock;
mod map {
    pub mod projection;
    pub mod tile_map;
}
mod charts {
    pub mod happiness_bar;
    pub mod trips_bar;
}
mod components {
    pub mod auto_audio;
    pub mod cards;
    pub mod city_on_map;
    pub mod meet_map;
    pub mod reveal;
    pub mod together_timer;
    pub mod top_songs;
}
mod pages {
    pub mod gift;
    pub mod intro;
    pub mod not_found;
    pub mod quiz;
}

use pages::{
    gift::Gift,
    intro::Intro,
    not_found::NotFound,
    quiz::Quiz,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Intro,
    #[at("/quiz")]
    Quiz,
    #[at("/gift")]
    Gift,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Intro => {
            info!("Rendering Intro page");
            html! { <Intro /> }
        },
        Route::Quiz => {
            info!("Rendering Quiz page");
            html! { <Quiz /> }
        },
        Route::Gift => {
            if unlock::is_unlocked() {
                info!("Rendering Gift page");
                html! { <Gift /> }
            } else {
                info!("Gift is still locked, sending back to intro");
                html! { <Redirect<Route> to={Route::Intro} /> }
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

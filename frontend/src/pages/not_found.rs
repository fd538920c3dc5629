use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <main style="min-height: 100vh; display: grid; place-items: center; background: #0b0b10; color: white; text-align: center;">
            <div>
                <h1>{"404"}</h1>
                <p style="opacity: 0.7;">{"Здесь подарка нет 🙃"}</p>
                <Link<Route> to={Route::Intro}>{"На главную"}</Link<Route>>
            </div>
        </main>
    }
}

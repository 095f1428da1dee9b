//! Admin dashboard for devotional content, rendered client-side with Yew.

mod api;
mod components;
mod config;
mod hooks;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

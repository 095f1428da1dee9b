use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "mock"))]
    #[at("/")]
    Devotionals,
    #[cfg(feature = "mock")]
    #[at("/devotional_admin/")]
    Devotionals,

    #[not_found]
    #[cfg(not(feature = "mock"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "mock")]
    #[at("/devotional_admin/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Devotionals => html! { <pages::DevotionalsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

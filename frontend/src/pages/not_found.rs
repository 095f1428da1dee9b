use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-xl", "px-4", "py-16", "text-center", "space-y-4")}>
            <h2 class={classes!("text-2xl", "font-bold")}>{"404 - Page not found"}</h2>
            <p class="text-[var(--muted)]">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Devotionals} classes={classes!("text-[var(--primary)]", "hover:underline")}>
                {"Back to devotionals"}
            </Link<Route>>
        </main>
    }
}

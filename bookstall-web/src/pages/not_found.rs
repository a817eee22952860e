use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Shown when routing fails to match a known view.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="min-h-screen flex flex-col items-center justify-center gap-4" aria-live="assertive">
            <h1 class="text-3xl font-bold">{ "Page not found" }</h1>
            <p class="text-base-content/70">{ "That shelf does not exist." }</p>
            <Link<Route> classes="btn btn-primary" to={Route::Storefront}>
                { "Back to the bookstall" }
            </Link<Route>>
        </section>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Destination of the unauthenticated purchase redirect.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! {
        <section class="min-h-screen flex items-center justify-center p-4" data-testid="register">
            <div class="card bg-base-100 shadow-md max-w-md w-full">
                <div class="card-body space-y-4">
                    <h1 class="card-title text-2xl">{ "Create your account" }</h1>
                    <p class="text-base-content/70">
                        { "You need an account to buy e-books. Sign up to keep your purchases in one place." }
                    </p>
                    <div class="card-actions">
                        <Link<Route> classes="btn btn-ghost" to={Route::Storefront}>
                            { "Back to the bookstall" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::storefront::StorefrontPage;
use crate::router::Route;

fn switch(route: Route) -> Html {
    match route {
        Route::Storefront => html! { <StorefrontPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Top-level component: router context plus the route switch.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

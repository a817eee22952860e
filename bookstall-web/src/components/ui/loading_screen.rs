use yew::prelude::*;

/// Full-screen indicator shown exclusively until the session settles.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div
            class="min-h-screen flex flex-col items-center justify-center gap-4"
            aria-busy="true"
            aria-live="polite"
            data-testid="loading-screen"
        >
            <span class="loading loading-spinner loading-lg"></span>
            <p class="text-base-content/70">{ "Loading the bookstall..." }</p>
        </div>
    }
}

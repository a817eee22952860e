use bookstall_core::{CatalogEntry, Identity, NotificationSlot, PurchaseRequest};
use yew::prelude::*;

use super::catalog_grid::CatalogGrid;
use super::loading_screen::LoadingScreen;
use super::notification_modal::NotificationModal;

#[derive(Properties, Clone, PartialEq)]
pub struct StorefrontPanelProps {
    pub ready: bool,
    pub identity: Option<Identity>,
    pub catalog: Vec<CatalogEntry>,
    pub slot: NotificationSlot,
    pub on_purchase: Callback<PurchaseRequest>,
    pub on_dismiss: Callback<()>,
}

/// Status line shown above the catalog.
#[must_use]
pub fn identity_status(identity: Option<&Identity>) -> String {
    identity.map_or_else(
        || "Browsing as a guest".to_string(),
        |id| format!("Signed in as {}", id.user_id),
    )
}

/// The storefront view, a pure function of session readiness, identity,
/// catalog and the notification slot.
#[function_component(StorefrontPanel)]
pub fn storefront_panel(props: &StorefrontPanelProps) -> Html {
    if !props.ready {
        return html! { <LoadingScreen /> };
    }
    html! {
        <section class="container mx-auto p-4 space-y-6" data-testid="storefront">
            <header class="flex items-baseline justify-between">
                <h1 class="text-3xl font-bold">{ "Bookstall" }</h1>
                <p class="text-sm text-base-content/70" data-testid="identity-status">
                    { identity_status(props.identity.as_ref()) }
                </p>
            </header>
            <CatalogGrid entries={props.catalog.clone()} on_purchase={props.on_purchase.clone()} />
            <NotificationModal slot={props.slot.clone()} on_dismiss={props.on_dismiss.clone()} />
        </section>
    }
}

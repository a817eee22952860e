//! The storefront page: wires session bootstrap, the catalog
//! subscription and the purchase action into the pure view panel.

use std::rc::Rc;

use bookstall_core::{
    FollowUp, Identity, NotificationSlot, PurchaseRequest, bootstrap_session, default_catalog,
    establish_identity, purchase, subscribe_catalog,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::backend::{self, Backend, JsClock};
use crate::components::ui::storefront_panel::StorefrontPanel;
use crate::dom;
use crate::host;
use crate::router::Route;

type SharedBackend = Rc<(bookstall_core::StoreConfig, Option<Backend>)>;

#[function_component(StorefrontPage)]
pub fn storefront_page() -> Html {
    let ready = use_state(|| false);
    let identity = use_state(|| None::<Identity>);
    let catalog = use_state(default_catalog);
    let slot = use_state(NotificationSlot::default);
    let navigator = use_navigator();

    // Config and backend handles are read once per mount; `None` handles
    // mean degraded mode with persistence disabled.
    let shared: SharedBackend = use_memo((), |()| {
        let config = host::load_config();
        let handles = backend::connect(&config);
        (config, handles)
    });

    // Session bootstrap: exactly one sign-in attempt, with the
    // identity-change listener as the single source of truth. The guard
    // releases the listener on unmount.
    {
        let ready = ready.clone();
        let identity = identity.clone();
        let shared = shared.clone();
        use_effect_with((), move |()| {
            let (config, handles) = &*shared;
            let mut guard = None;
            if let Some(handles) = handles {
                guard = Some(bootstrap_session(&handles.auth, move |next| {
                    identity.set(next);
                    ready.set(true);
                }));
                let auth = handles.auth.clone();
                let config = config.clone();
                spawn_local(async move {
                    establish_identity(auth, &config).await;
                });
            } else {
                ready.set(true);
            }
            move || drop(guard)
        });
    }

    // Catalog subscription once the store handle and readiness exist.
    // Re-subscribes fresh when readiness flips; the guard releases the
    // previous subscription first.
    {
        let catalog = catalog.clone();
        let shared = shared.clone();
        use_effect_with(*ready, move |ready| {
            let (config, handles) = &*shared;
            let mut guard = None;
            if *ready {
                if let Some(handles) = handles {
                    let catalog = catalog.clone();
                    guard = Some(subscribe_catalog(
                        &handles.store,
                        &config.namespace,
                        Rc::new(move |entries| catalog.set(entries)),
                    ));
                }
            }
            move || drop(guard)
        });
    }

    let on_purchase = {
        let identity = identity.clone();
        let slot = slot.clone();
        let shared = shared.clone();
        let navigator = navigator.clone();
        Callback::from(move |request: PurchaseRequest| {
            let identity = (*identity).clone();
            let slot = slot.clone();
            let shared = shared.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let (config, handles) = &*shared;
                let store = handles.as_ref().map(|h| h.store.clone());
                let outcome = purchase(
                    store.as_ref(),
                    &JsClock,
                    &config.namespace,
                    identity.as_ref(),
                    &request,
                )
                .await;

                let mut shown = (*slot).clone();
                shown.show(outcome.notice());
                slot.set(shown);

                if let Some(FollowUp::RedirectToRegister { delay_ms }) = outcome.follow_up() {
                    // Like the timer it replaces, this one keeps running if
                    // the page unmounts before it fires.
                    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
                    let _ = dom::sleep_ms(delay).await;
                    slot.set(NotificationSlot::default());
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Register);
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let slot = slot.clone();
        Callback::from(move |()| {
            let mut next = (*slot).clone();
            next.dismiss();
            slot.set(next);
        })
    };

    html! {
        <StorefrontPanel
            ready={*ready}
            identity={(*identity).clone()}
            catalog={(*catalog).clone()}
            slot={(*slot).clone()}
            on_purchase={on_purchase}
            on_dismiss={on_dismiss}
        />
    }
}

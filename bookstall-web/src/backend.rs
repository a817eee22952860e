//! Browser adapter for the managed backend service.
//!
//! The hosting page loads the vendor SDK and exposes a small shim object
//! at `globalThis.bookstallBackend`; this module calls into that shim and
//! implements the `bookstall-core` capability traits on top of it. The
//! shim contract:
//!
//! - `initialize(connection)` — connect with the given parameters.
//! - `signInWithToken(token)` / `signInAnonymously()` — return promises.
//! - `onIdentityChange(cb)` — calls `cb` with the user id string or
//!   `null`; returns an unsubscribe function.
//! - `subscribeCollection(path, onNext, onError)` — calls `onNext` with
//!   an array of `{ id, fields }` objects; returns an unsubscribe
//!   function.
//! - `writeDocument(path, docId, fields)` — returns a promise.
//! - `newDocumentId()` — returns a fresh unique document id.

use std::rc::Rc;

use async_trait::async_trait;
use bookstall_core::backend::{ErrorListener, IdentityListener, SnapshotListener};
use bookstall_core::{
    AuthGateway, BackendError, Clock, Document, DocumentStore, Identity, ListenerGuard,
    StoreConfig,
};
use js_sys::{Array, Function, Promise};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::dom::js_error_message;

const SHIM_GLOBAL: &str = "bookstallBackend";

/// Invoke one method on the host shim.
fn call_shim(method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let shim = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(SHIM_GLOBAL))?;
    if shim.is_undefined() || shim.is_null() {
        return Err(JsValue::from_str("backend shim is not installed"));
    }
    let func: Function = js_sys::Reflect::get(&shim, &JsValue::from_str(method))?.dyn_into()?;
    func.apply(&shim, args)
}

/// Invoke a promise-returning shim method and await its settlement.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn await_shim(method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let promise: Promise = call_shim(method, args)?.dyn_into()?;
    JsFuture::from(promise).await
}

/// Process-wide backend handles, initialized once at startup.
pub struct Backend {
    pub auth: Rc<dyn AuthGateway>,
    pub store: Rc<dyn DocumentStore>,
}

/// Connect to the backend, or report degraded mode.
///
/// Returns `None` (persistence disabled) when the configuration carries
/// no connection parameters or the shim rejects them; both cases are
/// logged once and never surface as interactive errors.
#[must_use]
pub fn connect(config: &StoreConfig) -> Option<Backend> {
    if config.is_degraded() {
        log::warn!("no backend configuration supplied; persistence disabled");
        return None;
    }
    let connection = match serde_wasm_bindgen::to_value(&config.connection) {
        Ok(value) => value,
        Err(e) => {
            log::error!("backend configuration not convertible: {e}");
            return None;
        }
    };
    match call_shim("initialize", &Array::of1(&connection)) {
        Ok(_) => Some(Backend {
            auth: Rc::new(WebAuthGateway),
            store: Rc::new(WebDocumentStore),
        }),
        Err(e) => {
            log::error!("backend initialization failed: {}", js_error_message(&e));
            None
        }
    }
}

/// Wrap a shim unsubscribe function and its pinned Rust closures into a
/// scoped guard. The closures must outlive the registration, so they ride
/// along in the release closure and drop with it.
fn guard_from(
    unsubscribe: Result<JsValue, JsValue>,
    closures: Vec<Closure<dyn FnMut(JsValue)>>,
) -> ListenerGuard {
    let unsubscribe = match unsubscribe.map(JsCast::dyn_into::<Function>) {
        Ok(Ok(func)) => Some(func),
        Ok(Err(value)) => {
            log::error!("shim returned a non-function unsubscribe: {value:?}");
            None
        }
        Err(e) => {
            log::error!("listener registration failed: {}", js_error_message(&e));
            None
        }
    };
    ListenerGuard::new(move || {
        if let Some(unsubscribe) = unsubscribe {
            if let Err(e) = unsubscribe.call0(&JsValue::UNDEFINED) {
                log::warn!("backend unsubscribe failed: {}", js_error_message(&e));
            }
        }
        drop(closures);
    })
}

pub struct WebAuthGateway;

#[async_trait(?Send)]
impl AuthGateway for WebAuthGateway {
    async fn sign_in_with_token(&self, token: &str) -> Result<(), BackendError> {
        await_shim("signInWithToken", &Array::of1(&JsValue::from_str(token)))
            .await
            .map(|_| ())
            .map_err(|e| BackendError::Auth(js_error_message(&e)))
    }

    async fn sign_in_anonymously(&self) -> Result<(), BackendError> {
        await_shim("signInAnonymously", &Array::new())
            .await
            .map(|_| ())
            .map_err(|e| BackendError::Auth(js_error_message(&e)))
    }

    fn on_identity_change(&self, mut listener: IdentityListener) -> ListenerGuard {
        let callback = Closure::wrap(Box::new(move |user_id: JsValue| {
            listener(user_id.as_string().map(Identity::new));
        }) as Box<dyn FnMut(JsValue)>);
        let unsubscribe = call_shim("onIdentityChange", &Array::of1(callback.as_ref()));
        guard_from(unsubscribe, vec![callback])
    }
}

/// Document shape delivered by the shim's snapshot callback.
#[derive(Deserialize)]
struct WireDocument {
    id: String,
    fields: serde_json::Value,
}

pub struct WebDocumentStore;

#[async_trait(?Send)]
impl DocumentStore for WebDocumentStore {
    fn subscribe(
        &self,
        path: &str,
        mut on_snapshot: SnapshotListener,
        mut on_error: ErrorListener,
    ) -> ListenerGuard {
        let on_next = Closure::wrap(Box::new(move |docs: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<WireDocument>>(docs) {
                Ok(docs) => on_snapshot(
                    docs.into_iter()
                        .map(|doc| Document {
                            id: doc.id,
                            fields: doc.fields,
                        })
                        .collect(),
                ),
                Err(e) => log::error!("discarding malformed snapshot payload: {e}"),
            }
        }) as Box<dyn FnMut(JsValue)>);
        let on_err = Closure::wrap(Box::new(move |error: JsValue| {
            on_error(BackendError::Subscription(js_error_message(&error)));
        }) as Box<dyn FnMut(JsValue)>);

        let unsubscribe = call_shim(
            "subscribeCollection",
            &Array::of3(&JsValue::from_str(path), on_next.as_ref(), on_err.as_ref()),
        );
        guard_from(unsubscribe, vec![on_next, on_err])
    }

    async fn write_document(
        &self,
        path: &str,
        doc_id: &str,
        fields: serde_json::Value,
    ) -> Result<(), BackendError> {
        let fields = serde_wasm_bindgen::to_value(&fields)
            .map_err(|e| BackendError::Write(e.to_string()))?;
        await_shim(
            "writeDocument",
            &Array::of3(&JsValue::from_str(path), &JsValue::from_str(doc_id), &fields),
        )
        .await
        .map(|_| ())
        .map_err(|e| BackendError::Write(js_error_message(&e)))
    }

    fn new_document_id(&self) -> String {
        match call_shim("newDocumentId", &Array::new()) {
            Ok(id) => id.as_string().unwrap_or_default(),
            Err(e) => {
                log::error!("document id generation failed: {}", js_error_message(&e));
                String::new()
            }
        }
    }
}

/// [`Clock`] backed by the browser's `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_iso8601(&self) -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
}

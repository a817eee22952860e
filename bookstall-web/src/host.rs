//! Configuration handed over by the hosting page.
//!
//! The host embeds three optional globals before the wasm bundle loads:
//! `__app_id` (application namespace), `__backend_config` (connection
//! parameters as a JSON string) and `__initial_auth_token` (credential
//! token). Each is read exactly once at startup; anything missing or
//! unparseable falls back to the [`StoreConfig`] defaults.

use bookstall_core::StoreConfig;
use wasm_bindgen::JsValue;

fn string_global(name: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

/// Read the startup configuration from the host page.
#[must_use]
pub fn load_config() -> StoreConfig {
    let mut config = StoreConfig::default();
    if let Some(namespace) = string_global("__app_id") {
        if !namespace.is_empty() {
            config.namespace = namespace;
        }
    }
    if let Some(raw) = string_global("__backend_config") {
        match serde_json::from_str(&raw) {
            Ok(connection) => config.connection = connection,
            Err(e) => log::warn!("ignoring unparseable __backend_config: {e}"),
        }
    }
    config.initial_token = string_global("__initial_auth_token").filter(|t| !t.is_empty());
    config
}

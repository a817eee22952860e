//! Capability traits for the managed backend service.
//!
//! Authentication, document storage and the realtime change feed are
//! delegated to an external service. The traits here are the seam between
//! the storefront logic and whichever adapter provides that service: the
//! web crate binds them to the host page's SDK shim, tests use in-memory
//! fakes. Listener registrations hand back a [`ListenerGuard`] so the
//! subscription is released deterministically when the guard drops.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::identity::Identity;

/// Errors surfaced by the backend adapter.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("subscription failed: {0}")]
    Subscription(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// A raw document delivered by the store: backend-assigned id plus its
/// field contents as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: serde_json::Value,
}

/// Cancellation handle for a listener registration. The registered
/// callback stops firing once the guard is dropped.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for degraded mode.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

pub type IdentityListener = Box<dyn FnMut(Option<Identity>)>;
pub type SnapshotListener = Box<dyn FnMut(Vec<Document>)>;
pub type ErrorListener = Box<dyn FnMut(BackendError)>;

/// Authentication capability of the backend service.
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn sign_in_with_token(&self, token: &str) -> Result<(), BackendError>;
    async fn sign_in_anonymously(&self) -> Result<(), BackendError>;

    /// Register for identity-change events. The listener is the single
    /// source of truth for the active identity; each event carries the new
    /// identity or `None` when signed out.
    fn on_identity_change(&self, listener: IdentityListener) -> ListenerGuard;
}

/// Document storage capability of the backend service.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Open a realtime query on a collection. Every change delivers the
    /// full set of documents to `on_snapshot`; failures go to `on_error`.
    fn subscribe(
        &self,
        path: &str,
        on_snapshot: SnapshotListener,
        on_error: ErrorListener,
    ) -> ListenerGuard;

    /// Atomically write one document under `path` with the given id.
    async fn write_document(
        &self,
        path: &str,
        doc_id: &str,
        fields: serde_json::Value,
    ) -> Result<(), BackendError>;

    /// A freshly generated document id, unique within the store.
    fn new_document_id(&self) -> String;
}

/// Wall-clock source for purchase timestamps.
pub trait Clock {
    /// Current instant as an ISO-8601 string.
    fn now_iso8601(&self) -> String;
}

/// [`Clock`] backed by the system clock. Browser builds use the adapter
/// in the web crate instead; this one serves native consumers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Collection path of the shared catalog for an application namespace.
#[must_use]
pub fn catalog_path(namespace: &str) -> String {
    format!("artifacts/{namespace}/public/data/books")
}

/// Collection path of one user's purchase records.
#[must_use]
pub fn purchases_path(namespace: &str, user_id: &str) -> String {
    format!("artifacts/{namespace}/users/{user_id}/purchases")
}

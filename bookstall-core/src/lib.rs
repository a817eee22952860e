//! Bookstall Core
//!
//! Platform-agnostic storefront logic for the Bookstall e-book shop.
//! This crate provides the catalog model, session bootstrap, realtime
//! subscription mapping and the purchase workflow without any UI or
//! browser-specific dependencies. The managed backend is reached through
//! the capability traits in [`backend`].

pub mod backend;
pub mod catalog;
pub mod config;
pub mod identity;
pub mod notification;
pub mod purchase;
pub mod session;
pub mod subscriber;

// Re-export commonly used types
pub use backend::{
    AuthGateway, BackendError, Clock, Document, DocumentStore, ListenerGuard, SystemClock,
    catalog_path, purchases_path,
};
pub use catalog::{CatalogEntry, catalog_from_documents, default_catalog, format_price};
pub use config::{DEFAULT_NAMESPACE, StoreConfig};
pub use identity::Identity;
pub use notification::{Notice, NotificationSlot};
pub use purchase::{
    FollowUp, PurchaseOutcome, PurchaseRecord, PurchaseRequest, REDIRECT_DELAY_MS, RejectReason,
    purchase,
};
pub use session::{bootstrap_session, establish_identity};
pub use subscriber::subscribe_catalog;

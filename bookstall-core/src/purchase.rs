//! The purchase workflow: validation, record construction and the single
//! document write.
//!
//! One invocation moves through
//! `Idle → Validating → {RequiresSignIn | Rejected | Writing} →
//! {Recorded | Failed}`; every right-hand state is terminal and nothing
//! retries automatically. Concurrent invocations are not serialized: a
//! second click before the first write resolves produces a second record.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::backend::{Clock, DocumentStore, purchases_path};
use crate::identity::Identity;
use crate::notification::Notice;

/// Delay before the unauthenticated notice dismisses itself and the view
/// navigates to registration.
pub const REDIRECT_DELAY_MS: u32 = 1_500;

/// User-initiated purchase action for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequest {
    pub entry_id: String,
    /// Title snapshot taken at click time.
    pub title: String,
    /// Price snapshot taken at click time, whole currency units.
    pub price: u32,
}

/// Append-only purchase document written under the buyer's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub ebook_id: String,
    pub book_title: String,
    pub price: u32,
    /// ISO-8601 instant of the purchase.
    pub purchase_date: String,
    pub user_id: String,
}

/// Validation rejections that stop a purchase before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingEntryId,
    StoreUnavailable,
}

impl RejectReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingEntryId => "Ebook ID is missing",
            Self::StoreUnavailable => "Database connection failed",
        }
    }
}

/// Terminal state of one purchase invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// No identity: not an error, the visitor is sent to registration.
    RequiresSignIn,
    Rejected(RejectReason),
    Recorded { title: String },
    Failed { message: String },
}

/// Action the view performs after displaying an outcome's notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Dismiss the notice after the delay, then navigate to registration.
    RedirectToRegister { delay_ms: u32 },
}

impl PurchaseOutcome {
    /// The notice this outcome displays.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::RequiresSignIn => Notice::failure(
                "You must be logged in to purchase. Redirecting to registration...",
            ),
            Self::Rejected(reason) => Notice::failure(reason.message()),
            Self::Recorded { title } => {
                Notice::success(format!("Successfully purchased '{title}'!"))
            }
            Self::Failed { message } => Notice::failure(format!("Purchase failed: {message}")),
        }
    }

    /// Follow-up action, if any. Only the unauthenticated case has one.
    #[must_use]
    pub fn follow_up(&self) -> Option<FollowUp> {
        match self {
            Self::RequiresSignIn => Some(FollowUp::RedirectToRegister {
                delay_ms: REDIRECT_DELAY_MS,
            }),
            _ => None,
        }
    }
}

/// Run one purchase invocation.
///
/// Validation order, first failure wins: identity present, entry id
/// non-empty, store available. On success exactly one record is written
/// under the buyer's purchases path with a freshly generated document id.
pub async fn purchase(
    store: Option<&Rc<dyn DocumentStore>>,
    clock: &dyn Clock,
    namespace: &str,
    identity: Option<&Identity>,
    request: &PurchaseRequest,
) -> PurchaseOutcome {
    let Some(identity) = identity else {
        return PurchaseOutcome::RequiresSignIn;
    };
    if request.entry_id.is_empty() {
        return PurchaseOutcome::Rejected(RejectReason::MissingEntryId);
    }
    let Some(store) = store else {
        return PurchaseOutcome::Rejected(RejectReason::StoreUnavailable);
    };

    let record = PurchaseRecord {
        ebook_id: request.entry_id.clone(),
        book_title: request.title.clone(),
        price: request.price,
        purchase_date: clock.now_iso8601(),
        user_id: identity.user_id.clone(),
    };
    let fields = match serde_json::to_value(&record) {
        Ok(fields) => fields,
        Err(e) => {
            return PurchaseOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    let path = purchases_path(namespace, &identity.user_id);
    let doc_id = store.new_document_id();
    match store.write_document(&path, &doc_id, fields).await {
        Ok(()) => PurchaseOutcome::Recorded {
            title: request.title.clone(),
        },
        Err(e) => {
            log::error!("purchase write failed: {e}");
            PurchaseOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}

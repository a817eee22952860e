//! Visitor identity established against the backend auth service.

/// The signed-in visitor. Wrapped in `Option` by consumers: `None` before
/// auth settles or when sign-in failed. Identity-change events overwrite
/// the active value unconditionally (last write wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

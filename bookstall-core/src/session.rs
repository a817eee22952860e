//! Session bootstrap against the backend auth service.
//!
//! Bootstrap splits in two: registering the identity-change listener
//! (the single source of truth for the active identity) and firing the
//! one sign-in attempt. Sign-in failures are logged and swallowed; the
//! listener decides what identity, if any, the session ends up with.

use std::rc::Rc;

use crate::backend::{AuthGateway, ListenerGuard};
use crate::config::StoreConfig;
use crate::identity::Identity;

/// Register the identity-change listener. Each event unconditionally
/// overwrites the identity slot and marks the session settled, whether or
/// not the preceding sign-in attempt succeeded. Dropping the returned
/// guard releases the listener.
pub fn bootstrap_session(
    auth: &Rc<dyn AuthGateway>,
    mut on_identity: impl FnMut(Option<Identity>) + 'static,
) -> ListenerGuard {
    auth.on_identity_change(Box::new(move |identity| on_identity(identity)))
}

/// Fire the single sign-in attempt for this session: the configured
/// credential token when present, anonymous otherwise. There is no
/// fallback from a failed token to anonymous; the failure is logged and
/// the identity listener reports whatever the backend settled on.
pub async fn establish_identity(auth: Rc<dyn AuthGateway>, config: &StoreConfig) {
    let result = match config.initial_token.as_deref() {
        Some(token) if !token.is_empty() => auth.sign_in_with_token(token).await,
        _ => auth.sign_in_anonymously().await,
    };
    if let Err(e) = result {
        log::warn!("sign-in failed, continuing without identity: {e}");
    }
}


use crate::{AuthGuard, AuthState, RecordingNavigator, User, permissions, roles};

use std::sync::Arc;

pub(crate) fn agent() -> User {
    User::new(7, "li.wei", roles::AGENT)
        .with_permissions([permissions::INCIDENT_VIEW, permissions::TICKET_VIEW])
}

/// A guard over a fixed snapshot, plus the navigator it redirects through.
pub(crate) fn guard_for(state: AuthState) -> (AuthGuard, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let guard = AuthGuard::new(Arc::new(state), Some(navigator.clone()));
    (guard, navigator)
}

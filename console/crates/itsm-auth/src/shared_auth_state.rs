use crate::{AuthState, AuthStateSource, User};

use std::sync::{Arc, PoisonError, RwLock};

use log::info;

/// Process-wide authentication state, written by the login flow.
///
/// Clones share the same state. Guards hold a clone and only read it.
#[derive(Debug, Clone, Default)]
pub struct SharedAuthState {
    inner: Arc<RwLock<AuthState>>,
}

impl SharedAuthState {
    pub fn new(state: AuthState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn login(&self, user: User) {
        info!("User '{}' signed in as {}", user.username, user.role);
        *self.write() = AuthState::authenticated(user);
    }

    pub fn logout(&self) {
        let mut state = self.write();
        if let Some(ref user) = state.user {
            info!("User '{}' signed out", user.username);
        }
        *state = AuthState::anonymous();
    }

    /// Applies `change` to the current user. No-op when signed out.
    pub fn update_user(&self, change: impl FnOnce(&mut User)) {
        if let Some(ref mut user) = self.write().user {
            change(user);
        }
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, AuthState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthStateSource for SharedAuthState {
    fn snapshot(&self) -> AuthState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

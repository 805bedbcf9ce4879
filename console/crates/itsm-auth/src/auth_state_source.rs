use crate::AuthState;

/// Read access to the current authentication state.
pub trait AuthStateSource: Send + Sync {
    fn snapshot(&self) -> AuthState;
}

/// A fixed snapshot, for non-interactive evaluation.
impl AuthStateSource for AuthState {
    fn snapshot(&self) -> AuthState {
        self.clone()
    }
}

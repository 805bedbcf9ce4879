pub(crate) mod auth_guard;
pub(crate) mod auth_state;
pub(crate) mod auth_state_source;
pub(crate) mod error;
pub(crate) mod guard_decision;
pub(crate) mod guard_requirement;
pub(crate) mod navigator;
pub(crate) mod shared_auth_state;
pub(crate) mod user;

/// Identifier namespaces and ready-made requirements.
pub mod permissions;
pub mod presets;
pub mod roles;

pub use auth_guard::AuthGuard;
pub use auth_state::AuthState;
pub use auth_state_source::AuthStateSource;
pub use error::{AuthError, Result};
pub use guard_decision::{Denial, GuardDecision};
pub use guard_requirement::AuthGuardRequirement;
pub use navigator::{Navigator, RecordingNavigator};
pub use shared_auth_state::SharedAuthState;
pub use user::User;

/// Where unauthenticated visitors are sent unless a requirement says otherwise.
pub const DEFAULT_REDIRECT: &str = "/login";

#[cfg(test)]
mod tests;

use crate::{AuthGuardRequirement, AuthState, AuthStateSource, Denial, GuardDecision, Navigator};

use std::sync::Arc;

use log::{debug, info};

/// Gates console content on the current authentication state.
///
/// The state is read fresh on every evaluation, so a guard can be built once
/// and kept for the lifetime of the console.
pub struct AuthGuard {
    source: Arc<dyn AuthStateSource>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl AuthGuard {
    pub fn new(source: Arc<dyn AuthStateSource>, navigator: Option<Arc<dyn Navigator>>) -> Self {
        Self { source, navigator }
    }

    /// Decides whether `requirement` is met.
    ///
    /// An unauthenticated visitor under `require_auth` triggers exactly one
    /// navigation to `redirect_to`. Role and permission failures never
    /// navigate.
    pub fn evaluate(&self, requirement: &AuthGuardRequirement) -> GuardDecision {
        let state = self.source.snapshot();

        if requirement.require_auth && !state.is_authenticated {
            info!(
                "Unauthenticated access, redirecting to {}",
                requirement.redirect_to
            );
            if let Some(ref navigator) = self.navigator {
                navigator.assign(&requirement.redirect_to);
            }
            return GuardDecision::Deny(Denial::Unauthenticated {
                redirect_to: requirement.redirect_to.clone(),
            });
        }

        let missing_roles = missing_roles(&state, requirement);
        let missing_permissions = missing_permissions(&state, requirement);

        if missing_roles.is_empty() && missing_permissions.is_empty() {
            return GuardDecision::Allow;
        }

        let denial = Denial::Forbidden {
            missing_roles,
            missing_permissions,
        };
        debug!(
            "Guard denied {}: {denial}",
            state
                .user
                .as_ref()
                .map_or("anonymous", |user| user.username.as_str())
        );
        GuardDecision::Deny(denial)
    }

    /// Returns `children` when access is allowed, otherwise `fallback`.
    pub fn guard<T>(
        &self,
        requirement: &AuthGuardRequirement,
        children: T,
        fallback: Option<T>,
    ) -> Option<T> {
        match self.evaluate(requirement) {
            GuardDecision::Allow => Some(children),
            GuardDecision::Deny(_) => fallback,
        }
    }
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard")
            .field("state", &self.source.snapshot())
            .field("has_navigator", &self.navigator.is_some())
            .finish()
    }
}

/// Required roles the user fails. Empty when the role check passes.
///
/// A user carries a single role, so under `require_all` more than one distinct
/// required role can never be satisfied.
fn missing_roles(state: &AuthState, requirement: &AuthGuardRequirement) -> Vec<String> {
    let required = &requirement.required_roles;
    if required.is_empty() {
        return Vec::new();
    }
    let Some(ref user) = state.user else {
        return required.clone();
    };

    let passes = if requirement.require_all {
        required.iter().all(|role| user.has_role(role))
    } else {
        required.iter().any(|role| user.has_role(role))
    };

    if passes {
        Vec::new()
    } else {
        unmet(required, |role| user.has_role(role))
    }
}

fn missing_permissions(state: &AuthState, requirement: &AuthGuardRequirement) -> Vec<String> {
    let required = &requirement.required_permissions;
    if required.is_empty() {
        return Vec::new();
    }
    let Some(ref user) = state.user else {
        return required.clone();
    };

    let passes = if requirement.require_all {
        required.iter().all(|permission| user.has_permission(permission))
    } else {
        required.iter().any(|permission| user.has_permission(permission))
    };

    if passes {
        Vec::new()
    } else {
        unmet(required, |permission| user.has_permission(permission))
    }
}

fn unmet(required: &[String], held: impl Fn(&str) -> bool) -> Vec<String> {
    required
        .iter()
        .filter(|name| !held(name.as_str()))
        .cloned()
        .collect()
}

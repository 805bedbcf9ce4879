use std::fmt;

use serde::Serialize;

/// Outcome of evaluating an [`AuthGuardRequirement`](crate::AuthGuardRequirement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    Deny(Denial),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Denial {
    /// Not signed in. `redirect_to` is the navigation target; it was only
    /// visited when the guard has a navigator.
    Unauthenticated { redirect_to: String },
    /// Signed in (or auth not required) but lacking roles or permissions.
    Forbidden {
        missing_roles: Vec<String>,
        missing_permissions: Vec<String>,
    },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Self::Allow => None,
            Self::Deny(denial) => Some(denial),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated { redirect_to } => {
                write!(f, "not authenticated, redirect to {redirect_to}")
            }
            Self::Forbidden {
                missing_roles,
                missing_permissions,
            } => {
                write!(f, "access denied")?;
                if !missing_roles.is_empty() {
                    write!(f, "; required roles: {}", missing_roles.join(", "))?;
                }
                if !missing_permissions.is_empty() {
                    write!(
                        f,
                        "; required permissions: {}",
                        missing_permissions.join(", ")
                    )?;
                }
                Ok(())
            }
        }
    }
}

use crate::roles;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the authentication service.
///
/// A user holds exactly one role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role: role.into(),
            permissions: BTreeSet::new(),
        }
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(roles::ADMIN) || self.has_role(roles::SUPER_ADMIN)
    }
}

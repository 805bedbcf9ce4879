use crate::{AuthError, Result as AuthResult, User};

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Authentication snapshot owned by the login flow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// Parses a JSON snapshot such as
    /// `{"user": {"id": 1, "username": "alice", "role": "admin", "permissions": []}, "isAuthenticated": true}`.
    pub fn from_json(json: &str) -> AuthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> AuthResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AuthError::session_read(path.to_path_buf(), e))?;
        Self::from_json(&contents)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.has_permission(permission))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user.as_ref().is_some_and(|user| user.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

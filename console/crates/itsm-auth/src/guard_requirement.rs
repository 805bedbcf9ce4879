use crate::DEFAULT_REDIRECT;

/// What a guarded section of the console asks of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGuardRequirement {
    pub require_auth: bool,
    pub required_roles: Vec<String>,
    pub required_permissions: Vec<String>,
    /// `true`: every listed role and permission must hold. `false`: any one.
    pub require_all: bool,
    pub redirect_to: String,
}

impl Default for AuthGuardRequirement {
    fn default() -> Self {
        Self {
            require_auth: true,
            required_roles: Vec::new(),
            required_permissions: Vec::new(),
            require_all: true,
            redirect_to: DEFAULT_REDIRECT.to_string(),
        }
    }
}

impl AuthGuardRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }

    pub fn require_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_roles.extend(roles.into_iter().map(Into::into));
        self
    }

    pub fn require_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    pub fn with_require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    pub fn with_redirect_to(mut self, redirect_to: impl Into<String>) -> Self {
        self.redirect_to = redirect_to.into();
        self
    }
}

//! Ready-made requirements for common console sections.

use crate::{AuthGuardRequirement, permissions, roles};

pub fn admin_only() -> AuthGuardRequirement {
    AuthGuardRequirement::new()
        .require_roles([roles::ADMIN, roles::SUPER_ADMIN])
        .with_require_all(false)
}

pub fn manager_only() -> AuthGuardRequirement {
    AuthGuardRequirement::new()
        .require_roles([roles::MANAGER, roles::ADMIN, roles::SUPER_ADMIN])
        .with_require_all(false)
}

pub fn agent_only() -> AuthGuardRequirement {
    AuthGuardRequirement::new()
        .require_roles([
            roles::AGENT,
            roles::MANAGER,
            roles::ADMIN,
            roles::SUPER_ADMIN,
        ])
        .with_require_all(false)
}

pub fn can_view_incidents() -> AuthGuardRequirement {
    AuthGuardRequirement::new().require_permissions([permissions::INCIDENT_VIEW])
}

pub fn can_manage_incidents() -> AuthGuardRequirement {
    AuthGuardRequirement::new()
        .require_permissions([
            permissions::INCIDENT_UPDATE,
            permissions::INCIDENT_DELETE,
            permissions::INCIDENT_ASSIGN,
        ])
        .with_require_all(false)
}

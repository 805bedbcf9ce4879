//! Role identifiers issued by the ITSM backend.

pub const SUPER_ADMIN: &str = "super_admin";
pub const ADMIN: &str = "admin";
pub const MANAGER: &str = "manager";
pub const AGENT: &str = "agent";
pub const USER: &str = "user";

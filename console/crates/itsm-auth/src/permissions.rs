//! Permission identifiers, `resource:action`.

pub const INCIDENT_VIEW: &str = "incident:view";
pub const INCIDENT_CREATE: &str = "incident:create";
pub const INCIDENT_UPDATE: &str = "incident:update";
pub const INCIDENT_DELETE: &str = "incident:delete";
pub const INCIDENT_ASSIGN: &str = "incident:assign";
pub const INCIDENT_CLOSE: &str = "incident:close";

pub const TICKET_VIEW: &str = "ticket:view";
pub const TICKET_CREATE: &str = "ticket:create";
pub const TICKET_UPDATE: &str = "ticket:update";
pub const TICKET_DELETE: &str = "ticket:delete";
pub const TICKET_ASSIGN: &str = "ticket:assign";
pub const TICKET_CLOSE: &str = "ticket:close";

pub const USER_VIEW: &str = "user:view";
pub const USER_CREATE: &str = "user:create";
pub const USER_UPDATE: &str = "user:update";
pub const USER_DELETE: &str = "user:delete";

pub const SYSTEM_CONFIG: &str = "system:config";
pub const SYSTEM_MONITOR: &str = "system:monitor";
pub const SYSTEM_BACKUP: &str = "system:backup";

pub const REPORT_VIEW: &str = "report:view";
pub const REPORT_EXPORT: &str = "report:export";

//! User display preferences for the ITSM console.
//!
//! A [`PreferenceStore`] owns exactly one [`UserPreferences`] value, merges
//! partial updates onto it, writes it back to a [`PreferenceStorage`] medium
//! after every change, and pushes the new value to its subscribers.

pub(crate) mod error;
pub(crate) mod language;
pub(crate) mod load_status;
pub(crate) mod notification_settings;
pub(crate) mod preference_store;
pub(crate) mod preferences_patch;
pub(crate) mod sort_direction;
pub(crate) mod storage;
pub(crate) mod subscription;
pub(crate) mod table_settings;
pub(crate) mod theme;
pub(crate) mod user_preferences;

#[cfg(test)]
mod tests;

pub use error::{PreferencesError, Result as PreferencesResult};
pub use language::Language;
pub use load_status::LoadStatus;
pub use notification_settings::NotificationSettings;
pub use preference_store::PreferenceStore;
pub use preferences_patch::UserPreferencesPatch;
pub use sort_direction::SortDirection;
pub use storage::{
    file_storage::FileStorage, memory_storage::MemoryStorage,
    preference_storage::PreferenceStorage,
};
pub use subscription::{Subscription, SubscriptionId};
pub use table_settings::{TableSettings, TableSettingsPatch};
pub use theme::Theme;
pub use user_preferences::UserPreferences;

/// Storage key under which the whole preferences object is persisted.
pub const PREFERENCES_KEY: &str = "itsm_preferences";

const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";
const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_DASHBOARD_WIDGETS: [&str; 4] = ["overview", "tickets", "incidents", "sla"];
const DEFAULT_NOTIFICATION_TYPES: [&str; 3] =
    ["ticket_assigned", "incident_escalated", "sla_breach"];

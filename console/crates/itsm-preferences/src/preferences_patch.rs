use crate::{Language, NotificationSettings, TableSettings, Theme};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Partial update data for user preferences.
///
/// Every field is optional; `None` leaves the current value untouched.
/// `notifications` and `table_settings` replace the whole nested value when
/// present. The persisted blob is read through this shape too, so a stored
/// object missing some fields merges cleanly over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferencesPatch {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub page_size: Option<u32>,
    pub sidebar_collapsed: Option<bool>,
    pub dashboard_layout: Option<Vec<String>>,
    pub notifications: Option<NotificationSettings>,
    pub table_settings: Option<BTreeMap<String, TableSettings>>,
}

impl UserPreferencesPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

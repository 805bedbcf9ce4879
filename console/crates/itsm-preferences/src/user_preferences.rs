use crate::{
    DEFAULT_DASHBOARD_WIDGETS, DEFAULT_DATE_FORMAT, DEFAULT_PAGE_SIZE, DEFAULT_TIMEZONE, Language,
    NotificationSettings, TableSettings, TableSettingsPatch, Theme, UserPreferencesPatch,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display preferences for the signed-in console user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub language: Language,
    pub timezone: String,
    pub date_format: String,
    pub page_size: u32,
    pub sidebar_collapsed: bool,
    /// Dashboard widget ids, in display order.
    pub dashboard_layout: Vec<String>,
    pub notifications: NotificationSettings,
    /// Keyed by table id, e.g. `tickets` or `incidents`.
    pub table_settings: BTreeMap<String, TableSettings>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            timezone: String::from(DEFAULT_TIMEZONE),
            date_format: String::from(DEFAULT_DATE_FORMAT),
            page_size: DEFAULT_PAGE_SIZE,
            sidebar_collapsed: false,
            dashboard_layout: DEFAULT_DASHBOARD_WIDGETS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            notifications: NotificationSettings::default(),
            table_settings: BTreeMap::new(),
        }
    }
}

impl UserPreferences {
    /// Shallow merge: only fields present in `patch` change.
    pub fn apply(&mut self, patch: UserPreferencesPatch) {
        let UserPreferencesPatch {
            theme,
            language,
            timezone,
            date_format,
            page_size,
            sidebar_collapsed,
            dashboard_layout,
            notifications,
            table_settings,
        } = patch;

        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(timezone) = timezone {
            self.timezone = timezone;
        }
        if let Some(date_format) = date_format {
            self.date_format = date_format;
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        if let Some(sidebar_collapsed) = sidebar_collapsed {
            self.sidebar_collapsed = sidebar_collapsed;
        }
        if let Some(dashboard_layout) = dashboard_layout {
            self.dashboard_layout = dashboard_layout;
        }
        if let Some(notifications) = notifications {
            self.notifications = notifications;
        }
        if let Some(table_settings) = table_settings {
            self.table_settings = table_settings;
        }
    }

    /// Merge `patch` into one table's settings, leaving other tables alone.
    pub fn apply_table_settings(&mut self, table_id: &str, patch: TableSettingsPatch) {
        self.table_settings
            .entry(table_id.to_string())
            .or_default()
            .apply(patch);
    }

    pub fn table(&self, table_id: &str) -> Option<&TableSettings> {
        self.table_settings.get(table_id)
    }
}

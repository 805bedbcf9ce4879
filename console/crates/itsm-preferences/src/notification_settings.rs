use crate::DEFAULT_NOTIFICATION_TYPES;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Delivery channels plus the notification types the user wants at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email: bool,
    pub browser: bool,
    pub sms: bool,
    pub types: BTreeSet<String>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            browser: true,
            sms: false,
            types: DEFAULT_NOTIFICATION_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl NotificationSettings {
    pub fn is_enabled(&self, notification_type: &str) -> bool {
        self.types.contains(notification_type)
    }
}

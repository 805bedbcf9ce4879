use crate::SortDirection;

use serde::{Deserialize, Serialize};

/// Column layout and sort order for one data table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSettings {
    /// Visible columns, in display order.
    pub columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

/// Partial update for one table. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TableSettingsPatch {
    pub columns: Option<Vec<String>>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl TableSettings {
    pub fn apply(&mut self, patch: TableSettingsPatch) {
        if let Some(columns) = patch.columns {
            self.columns = columns;
        }
        if let Some(sort_field) = patch.sort_field {
            self.sort_field = Some(sort_field);
        }
        if let Some(sort_direction) = patch.sort_direction {
            self.sort_direction = Some(sort_direction);
        }
    }
}

impl TableSettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.columns.is_none() && self.sort_field.is_none() && self.sort_direction.is_none()
    }
}

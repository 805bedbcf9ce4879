/// How the store obtained its initial preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A stored blob was read and merged over the defaults.
    Loaded,
    /// The medium had nothing under the preferences key (first launch).
    Missing,
    /// No storage medium exists in this runtime; defaults live in memory only.
    Unavailable,
    /// The stored blob could not be read or did not match the expected
    /// shape. Defaults were used instead.
    Recovered { reason: String },
}

impl LoadStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

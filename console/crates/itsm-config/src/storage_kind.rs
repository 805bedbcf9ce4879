use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which key-value medium backs the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// One JSON file per key under the preferences directory.
    #[default]
    File,
    /// Process memory only; lost on exit.
    Memory,
    /// No medium at all, as in a non-interactive context.
    None,
}

impl FromStr for StorageKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::File => "file",
            Self::Memory => "memory",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

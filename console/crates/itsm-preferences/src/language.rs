use crate::{PreferencesError, PreferencesResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// UI locale. Serialized as its BCP 47 tag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl FromStr for Language {
    type Err = PreferencesError;

    #[track_caller]
    fn from_str(s: &str) -> PreferencesResult<Self> {
        match s {
            "zh-CN" => Ok(Self::ZhCn),
            "en-US" => Ok(Self::EnUs),
            _ => Err(PreferencesError::invalid_value("language", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

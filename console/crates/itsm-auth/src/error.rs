use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures loading an auth-state snapshot.
///
/// Access denials are not errors; see [`crate::GuardDecision`].
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read session file {path}: {source} {location}")]
    SessionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid session data: {source} {location}")]
    SessionParse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn session_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::SessionRead {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::SessionRead { .. } => "SESSION_READ_FAILED",
            Self::SessionParse { .. } => "SESSION_INVALID",
        }
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::SessionParse {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;

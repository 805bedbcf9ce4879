use std::sync::{Mutex, PoisonError};

/// Full-page navigation, like assigning `window.location.href`.
///
/// Implementations reload the page at `location`; client state is lost.
pub trait Navigator: Send + Sync {
    fn assign(&self, location: &str);
}

/// Navigator that remembers every location it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn assign(&self, location: &str) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}

use crate::{
    LoadStatus, PREFERENCES_KEY, PreferenceStorage, Subscription, SubscriptionId,
    TableSettingsPatch, UserPreferences, UserPreferencesPatch,
};

use std::collections::VecDeque;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

type Listener = Arc<dyn Fn(&UserPreferences) + Send + Sync>;

/// Single owner of the console's display preferences.
///
/// Construct one per application context and share it (e.g. behind an
/// `Arc`). Every mutation is merged onto the current value, written back to
/// storage as one JSON blob, and then pushed to subscribers in registration
/// order. Storage failures are logged and never reach the caller.
pub struct PreferenceStore {
    inner: Arc<Mutex<StoreInner>>,
    storage: Option<Arc<dyn PreferenceStorage>>,
    load_status: LoadStatus,
}

pub(crate) struct StoreInner {
    preferences: UserPreferences,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
    /// Changes not yet delivered, oldest first.
    pending: VecDeque<(&'static str, UserPreferences)>,
    /// Set while some caller is draining `pending`.
    delivering: bool,
}

impl StoreInner {
    pub(crate) fn remove_listener(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl PreferenceStore {
    /// Builds a store over `storage`, or over nothing when `None`.
    pub fn new(storage: Option<Arc<dyn PreferenceStorage>>) -> Self {
        let (preferences, load_status) = Self::load(storage.as_deref());

        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                preferences,
                listeners: Vec::new(),
                next_id: 0,
                pending: VecDeque::new(),
                delivering: false,
            })),
            storage,
            load_status,
        }
    }

    pub fn with_storage<S: PreferenceStorage + 'static>(storage: S) -> Self {
        Self::new(Some(Arc::new(storage)))
    }

    /// A store with no storage medium: defaults, in memory only.
    pub fn detached() -> Self {
        Self::new(None)
    }

    fn load(storage: Option<&dyn PreferenceStorage>) -> (UserPreferences, LoadStatus) {
        let Some(storage) = storage else {
            debug!("No preference storage available, using defaults in memory");
            return (UserPreferences::default(), LoadStatus::Unavailable);
        };

        let blob = match storage.read(PREFERENCES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                info!("No stored preferences under '{PREFERENCES_KEY}' (first launch)");
                return (UserPreferences::default(), LoadStatus::Missing);
            }
            Err(e) => {
                warn!("Failed to read stored preferences, using defaults: {e}");
                return (
                    UserPreferences::default(),
                    LoadStatus::Recovered {
                        reason: e.to_string(),
                    },
                );
            }
        };

        match serde_json::from_str::<UserPreferencesPatch>(&blob) {
            Ok(stored) => {
                let mut preferences = UserPreferences::default();
                preferences.apply(stored);
                info!("Loaded stored preferences under '{PREFERENCES_KEY}'");
                (preferences, LoadStatus::Loaded)
            }
            Err(e) => {
                warn!("Stored preferences do not match the expected shape, using defaults: {e}");
                (
                    UserPreferences::default(),
                    LoadStatus::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// An owned copy of the current preferences.
    pub fn get(&self) -> UserPreferences {
        self.lock().preferences.clone()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Shallow-merges `patch`, persists, and notifies subscribers.
    ///
    /// Values are taken as given; no range checks are applied.
    pub fn update(&self, patch: UserPreferencesPatch) {
        self.mutate("update", |preferences| preferences.apply(patch));
    }

    /// Merges `patch` into the settings of `table_id` only.
    pub fn update_table_settings(&self, table_id: &str, patch: TableSettingsPatch) {
        self.mutate("update_table_settings", |preferences| {
            preferences.apply_table_settings(table_id, patch)
        });
    }

    /// Restores the defaults, persists, and notifies subscribers.
    pub fn reset(&self) {
        self.mutate("reset", |preferences| {
            *preferences = UserPreferences::default()
        });
    }

    /// Registers `listener` for every future change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&UserPreferences) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        debug!("Registered preference listener {id}");

        Subscription::new(id, Arc::downgrade(&self.inner))
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Applies one change, then delivers it.
    ///
    /// Changes are delivered strictly in mutation order. A change made while
    /// another caller is delivering (a listener re-entering the store, or a
    /// second thread) is queued and delivered by that caller, so the last
    /// value every listener sees is the one `get()` returns.
    fn mutate(&self, operation: &'static str, apply: impl FnOnce(&mut UserPreferences)) {
        {
            let mut inner = self.lock();
            apply(&mut inner.preferences);
            self.persist(&inner.preferences);

            let snapshot = inner.preferences.clone();
            inner.pending.push_back((operation, snapshot));
            if inner.delivering {
                debug!("Preferences changed by {operation} during delivery, queued");
                return;
            }
            inner.delivering = true;
        }

        self.deliver_pending();
    }

    fn deliver_pending(&self) {
        loop {
            let (operation, snapshot, listeners) = {
                let mut inner = self.lock();
                let Some((operation, snapshot)) = inner.pending.pop_front() else {
                    inner.delivering = false;
                    return;
                };
                let listeners: Vec<(SubscriptionId, Listener)> = inner
                    .listeners
                    .iter()
                    .map(|(id, listener)| (*id, Arc::clone(listener)))
                    .collect();
                (operation, snapshot, listeners)
            };

            debug!(
                "Preferences changed by {operation}, notifying {} listener(s)",
                listeners.len()
            );

            // Outside the lock so listeners may use the store.
            for (id, listener) in listeners {
                if catch_unwind(AssertUnwindSafe(|| listener(&snapshot))).is_err() {
                    error!("Preference listener {id} panicked during {operation}; continuing");
                }
            }
        }
    }

    fn persist(&self, preferences: &UserPreferences) {
        let Some(ref storage) = self.storage else {
            return;
        };

        let blob = match serde_json::to_string(preferences) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to serialize preferences, keeping them in memory: {e}");
                return;
            }
        };

        if let Err(e) = storage.write(PREFERENCES_KEY, &blob) {
            warn!("Failed to persist preferences, keeping them in memory: {e}");
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("load_status", &self.load_status)
            .field("has_storage", &self.storage.is_some())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

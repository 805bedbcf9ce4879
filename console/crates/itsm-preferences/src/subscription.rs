use crate::preference_store::StoreInner;

use std::fmt;
use std::sync::{Mutex, PoisonError, Weak};

/// Identifies one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Handle returned by [`PreferenceStore::subscribe`](crate::PreferenceStore::subscribe).
///
/// Dropping the handle does not unsubscribe; call [`Subscription::unsubscribe`].
#[must_use = "the listener stays registered until unsubscribe() is called"]
pub struct Subscription {
    id: SubscriptionId,
    store: Weak<Mutex<StoreInner>>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, store: Weak<Mutex<StoreInner>>) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes exactly this listener. Returns false if the store is gone or
    /// the listener was already removed.
    pub fn unsubscribe(self) -> bool {
        let Some(store) = self.store.upgrade() else {
            return false;
        };

        let mut inner = store.lock().unwrap_or_else(PoisonError::into_inner);
        inner.remove_listener(self.id)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

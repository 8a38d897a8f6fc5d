//! Bounded-LRU cache of recent failure counters per peer.
//!
//! Suppresses churn from transiently dead peers: a peer that has failed
//! `max_fail` times inside `cache_timeout` is treated as suppressed and
//! rejected by `RoutingTable::peer_online` until the window goes stale.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::{Id, Timestamp};

/// `(counter, lastOffline)` for one peer's recent failure history.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineLogEntry {
    pub counter: u32,
    pub last_offline: Timestamp,
}

pub(crate) struct OfflineLog {
    entries: Mutex<LruCache<Id, Arc<Mutex<OfflineLogEntry>>>>,
    cache_timeout_millis: u64,
    max_fail: u32,
}

impl OfflineLog {
    pub fn new(capacity: usize, cache_timeout_millis: u64, max_fail: u32) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            entries: Mutex::new(LruCache::new(cap)),
            cache_timeout_millis,
            max_fail,
        }
    }

    fn should_remove(&self, entry: &OfflineLogEntry, now: Timestamp) -> bool {
        now.saturating_sub(entry.last_offline) <= self.cache_timeout_millis
            && entry.counter >= self.max_fail
    }

    /// Clears any log entry for `id`. Called on first-hand observation,
    /// which overrides suppression from earlier failures.
    pub fn clear(&self, id: &Id) {
        self.entries.lock().pop(id);
    }

    /// Records a failure. Returns `true` if the peer should be removed
    /// from the routing table as a result of this failure (or already
    /// qualified for removal before it).
    ///
    /// `force` sets the counter straight to `max_fail`, guaranteeing
    /// removal regardless of the timeout window.
    pub fn record_failure(&self, id: Id, force: bool, now: Timestamp) -> bool {
        let entry = {
            let mut map = self.entries.lock();
            map.get_or_insert(id, || Arc::new(Mutex::new(OfflineLogEntry::default())))
                .clone()
        };

        let mut guard = entry.lock();

        if force {
            guard.counter = self.max_fail;
            return true;
        }

        if self.should_remove(&guard, now) {
            return true;
        }

        guard.counter += 1;
        guard.last_offline = now;

        self.should_remove(&guard, now)
    }

    /// `true` if `id` is currently suppressed by an unexpired failure
    /// streak. Purges the entry if it has gone stale.
    pub fn is_suppressed(&self, id: &Id, now: Timestamp) -> bool {
        let entry = {
            let map = self.entries.lock();
            match map.peek(id) {
                Some(e) => e.clone(),
                None => return false,
            }
        };

        let guard = entry.lock();
        if self.should_remove(&guard, now) {
            return true;
        }

        let stale = now.saturating_sub(guard.last_offline) > self.cache_timeout_millis;
        drop(guard);
        if stale {
            self.entries.lock().pop(id);
        }
        false
    }
}

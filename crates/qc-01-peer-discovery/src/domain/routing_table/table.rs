//! `RoutingTable`: orchestrates buckets, the offline log, the maintenance
//! queue, the oversize index and the listener set behind one cohesive API.
//!
//! Reference: distilled routing-table specification, §4.

use std::collections::HashSet;
use std::fmt;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::services::{class_of, is_closer as is_closer_distance, sort_by_distance};
use crate::domain::{Id, PeerAddress, RoutingTableConfig, RoutingTableError, Timestamp};

use super::bucket::BucketState;
use super::config::NUM_BUCKETS;
use super::listeners::{ListenerSet, RoutingTableListener};
use super::maintenance::MaintenanceQueue;
use super::offline_log::OfflineLog;
use super::oversize::OversizeIndex;

/// A Kademlia-style routing table: a bounded, well-distributed sample of
/// live peers, ranked by XOR distance to any 160-bit key.
///
/// All public methods are safe to call concurrently from any number of
/// threads; see the crate's concurrency model for the locking discipline
/// that makes this true without serializing unrelated bucket traffic.
pub struct RoutingTable {
    self_id: Id,
    config: RoutingTableConfig,
    buckets: Vec<Mutex<BucketState>>,
    oversize: OversizeIndex,
    offline_log: OfflineLog,
    maintenance: MaintenanceQueue,
    listeners: ListenerSet,
    filtered_addresses: Mutex<HashSet<IpAddr>>,
    peer_count: AtomicUsize,
}

impl fmt::Debug for RoutingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutingTable")
            .field("self_id", &self.self_id)
            .field("size", &self.size())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RoutingTable {
    /// Builds an empty routing table for `self_id`.
    ///
    /// Fails if `self_id == Id::ZERO` — per §6, construction with a zero
    /// local id is an invalid-configuration error, not a runtime gate.
    pub fn new(self_id: Id, config: RoutingTableConfig) -> Result<Self, RoutingTableError> {
        if self_id.is_zero() {
            return Err(RoutingTableError::InvalidConfiguration);
        }

        let offline_log = OfflineLog::new(
            config.cache_size,
            config.cache_timeout_millis,
            config.max_fail,
        );
        let buckets = (0..NUM_BUCKETS)
            .map(|_| Mutex::new(BucketState::new()))
            .collect();

        Ok(Self {
            self_id,
            config,
            buckets,
            oversize: OversizeIndex::new(),
            offline_log,
            maintenance: MaintenanceQueue::new(),
            listeners: ListenerSet::new(),
            filtered_addresses: Mutex::new(HashSet::new()),
            peer_count: AtomicUsize::new(0),
        })
    }

    pub fn self_id(&self) -> Id {
        self.self_id
    }

    pub fn config(&self) -> &RoutingTableConfig {
        &self.config
    }

    /// Constant-time: backed by an atomic counter, not a bucket scan.
    pub fn size(&self) -> usize {
        self.peer_count.load(Ordering::Relaxed)
    }

    pub fn add_address_filter(&self, ip: IpAddr) {
        self.filtered_addresses.lock().insert(ip);
    }

    pub fn add_listener(&self, listener: Arc<dyn RoutingTableListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn RoutingTableListener>) {
        self.listeners.remove(listener);
    }

    /// `true` iff `id` currently has a bucket entry.
    pub fn contains(&self, id: &Id) -> bool {
        let Some(class) = self.class_of(id) else {
            return false;
        };
        self.buckets[class].lock().contains(id)
    }

    /// Snapshot of every peer currently tracked, in unspecified order.
    pub fn get_all(&self) -> Vec<PeerAddress> {
        self.buckets
            .iter()
            .flat_map(|bucket| {
                bucket
                    .lock()
                    .iter()
                    .map(|entry| entry.peer.clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Three-way comparison of `a` and `b`'s XOR distance to `id`.
    pub fn is_closer(&self, id: &Id, a: &Id, b: &Id) -> std::cmp::Ordering {
        is_closer_distance(id, a, b)
    }

    /// The class index of `id` relative to this table's local id, or
    /// `None` for the sentinel (`id == self_id`).
    fn class_of(&self, id: &Id) -> Option<usize> {
        let class = class_of(&self.self_id, id);
        if class < 0 {
            None
        } else {
            Some(class as usize)
        }
    }

    /// Peers ordered by ascending XOR distance to `id`, with at least
    /// `at_least` entries when that many are known.
    pub fn close_peers(&self, id: &Id, at_least: usize) -> Vec<PeerAddress> {
        let mut result = Vec::new();

        match self.class_of(id) {
            None => {
                // `id == self_id`: walk buckets in increasing class order.
                for class in 0..NUM_BUCKETS {
                    result.extend(self.bucket_peers(class));
                    if result.len() >= at_least {
                        break;
                    }
                }
            }
            Some(class) => {
                result.extend(self.bucket_peers(class));
                if result.len() < at_least {
                    for c in (0..class).rev() {
                        result.extend(self.bucket_peers(c));
                        if result.len() >= at_least {
                            break;
                        }
                    }
                }
                if result.len() < at_least {
                    for c in (class + 1)..NUM_BUCKETS {
                        result.extend(self.bucket_peers(c));
                        if result.len() >= at_least {
                            break;
                        }
                    }
                }
            }
        }

        sort_by_distance(&result, id)
    }

    fn bucket_peers(&self, class: usize) -> Vec<PeerAddress> {
        self.buckets[class]
            .lock()
            .iter()
            .map(|entry| entry.peer.clone())
            .collect()
    }

    /// Drains and returns every peer whose scheduled maintenance check is
    /// due. Empty when maintenance is disabled (`maintenance_timeouts_secs`
    /// is empty).
    pub fn peers_for_maintenance(&self, now: Timestamp) -> Vec<PeerAddress> {
        if self.config.maintenance_timeouts_secs.is_empty() {
            return Vec::new();
        }

        self.maintenance
            .drain_due(now)
            .into_iter()
            .filter_map(|id| {
                let class = self.class_of(&id)?;
                self.buckets[class].lock().address(&id)
            })
            .collect()
    }

    /// Records that `remote` was observed alive.
    ///
    /// `referrer == None` denotes first-hand observation (we spoke to the
    /// peer ourselves); `Some(_)` denotes second-hand (another peer told
    /// us about it).
    pub fn peer_online(&self, remote: PeerAddress, referrer: Option<Id>, now: Timestamp) -> bool {
        let first_hand = referrer.is_none();

        if first_hand {
            self.offline_log.clear(&remote.id);
        }

        if remote.id.is_zero() || remote.id == self.self_id {
            return false;
        }
        if self.offline_log.is_suppressed(&remote.id, now) {
            return false;
        }
        if self.filtered_addresses.lock().contains(&remote.address) {
            return false;
        }
        if remote.firewalled_tcp {
            return false;
        }

        let class = class_of(&self.self_id, &remote.id) as usize;
        let bucket_mutex = &self.buckets[class];

        enum Outcome {
            Inserted,
            Updated,
        }

        let outcome = {
            let mut bucket = bucket_mutex.lock();
            let has_room = self.size() < self.config.max_peers();
            if has_room || bucket.contains(&remote.id) {
                let was_new = bucket.insert_or_update(remote.clone(), now);
                if was_new && bucket.len() > self.config.bag_size {
                    self.oversize.add(class);
                }
                Some(if was_new {
                    Outcome::Inserted
                } else {
                    Outcome::Updated
                })
            } else {
                None
            }
        };

        let outcome = match outcome {
            Some(outcome) => outcome,
            None => {
                let has_bucket_room = bucket_mutex.lock().len() < self.config.bag_size;
                if !has_bucket_room || !self.remove_latest_entry_exceeding_bag_size() {
                    return false;
                }
                let mut bucket = bucket_mutex.lock();
                let was_new = bucket.insert_or_update(remote.clone(), now);
                if was_new && bucket.len() > self.config.bag_size {
                    self.oversize.add(class);
                }
                if was_new {
                    Outcome::Inserted
                } else {
                    Outcome::Updated
                }
            }
        };

        match outcome {
            Outcome::Inserted => {
                self.peer_count.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(peer_id = %remote.id, class, "peer inserted");
                self.listeners.notify_inserted(&remote);
            }
            Outcome::Updated => {
                tracing::trace!(peer_id = %remote.id, class, "peer updated");
                self.listeners.notify_updated(&remote);
            }
        }

        self.schedule_maintenance(class, &remote.id, now);
        if first_hand {
            self.update_first_hand_stat(class, &remote.id, now);
        }

        true
    }

    /// Reports that `remote` failed. Returns `true` iff the peer was
    /// removed as a result.
    pub fn peer_offline(&self, remote: &PeerAddress, force: bool, now: Timestamp) -> bool {
        tracing::debug!(peer_id = %remote.id, force, "peer offline report");
        self.listeners.notify_fail(remote);

        let should_remove = self.offline_log.record_failure(remote.id, force, now);

        if !should_remove {
            if let Some(class) = self.class_of(&remote.id) {
                {
                    let mut bucket = self.buckets[class].lock();
                    if let Some(stat) = bucket.stat_mut(&remote.id) {
                        stat.last_seen_online = Timestamp::ZERO;
                    }
                }
                self.schedule_maintenance(class, &remote.id, now);
            }
            return false;
        }

        self.remove_peer(remote)
    }

    /// `true` if `id` is currently suppressed by an unexpired offline-log
    /// failure streak.
    pub fn is_peer_removed_temporarily(&self, id: &Id, now: Timestamp) -> bool {
        self.offline_log.is_suppressed(id, now)
    }

    fn remove_peer(&self, remote: &PeerAddress) -> bool {
        let Some(class) = self.class_of(&remote.id) else {
            return false;
        };

        let removed = {
            let mut bucket = self.buckets[class].lock();
            let removed = bucket.remove(&remote.id);
            if bucket.len() <= self.config.bag_size {
                self.oversize.remove(class);
            }
            removed
        };

        let Some(entry) = removed else {
            return false;
        };

        self.maintenance.remove(&remote.id);
        self.peer_count.fetch_sub(1, Ordering::Relaxed);
        tracing::debug!(peer_id = %remote.id, class, "peer removed");
        self.listeners.notify_removed(&entry.peer);
        self.listeners.notify_offline(&entry.peer);
        true
    }

    /// Evicts the globally least-recently-seen peer from the first bucket
    /// found truly over `bag_size`. Releases exactly one slot per call.
    fn remove_latest_entry_exceeding_bag_size(&self) -> bool {
        for class in self.oversize.snapshot() {
            let Some(bucket_mutex) = self.buckets.get(class) else {
                continue;
            };

            let mut bucket = bucket_mutex.lock();
            if bucket.len() <= self.config.bag_size {
                self.oversize.remove(class);
                continue;
            }

            let Some(victim_id) = bucket.least_recently_online() else {
                continue;
            };
            let Some(victim) = bucket.remove(&victim_id) else {
                continue;
            };
            let still_oversize = bucket.len() > self.config.bag_size;
            drop(bucket);

            if !still_oversize {
                self.oversize.remove(class);
            }

            self.maintenance.remove(&victim_id);
            self.peer_count.fetch_sub(1, Ordering::Relaxed);
            tracing::debug!(peer_id = %victim_id, class, "evicted oversize bucket entry");
            self.listeners.notify_removed(&victim.peer);
            return true;
        }
        false
    }

    fn schedule_maintenance(&self, class: usize, id: &Id, now: Timestamp) {
        if self.config.maintenance_timeouts_secs.is_empty() {
            return;
        }

        let at = {
            let bucket = self.buckets[class].lock();
            match bucket.stat(id) {
                Some(stat) if stat.last_seen_online != Timestamp::ZERO => {
                    let ramp_len = self.config.maintenance_timeouts_secs.len();
                    let idx = (stat.checked as usize).min(ramp_len - 1);
                    now.add_secs(self.config.maintenance_timeouts_secs[idx])
                }
                _ => now,
            }
        };

        tracing::trace!(peer_id = %id, class, scheduled_at = at.as_millis(), "scheduled maintenance check");
        self.maintenance.schedule(*id, at);
    }

    fn update_first_hand_stat(&self, class: usize, id: &Id, now: Timestamp) {
        let mut bucket = self.buckets[class].lock();
        if let Some(stat) = bucket.stat_mut(id) {
            let ramp_len = self.config.maintenance_timeouts_secs.len();
            if ramp_len > 0 && (stat.checked as usize) < ramp_len {
                let elapsed_ms = now.saturating_sub(stat.first_seen);
                let threshold_ms = self.config.maintenance_timeouts_secs[stat.checked as usize] * 1000;
                if elapsed_ms > threshold_ms {
                    stat.checked += 1;
                }
            }
            stat.last_seen_online = now;
        }
    }
}

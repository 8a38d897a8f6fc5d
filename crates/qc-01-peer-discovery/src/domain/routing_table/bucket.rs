//! A single bucket's contents: the peers at one XOR-distance class, plus
//! their per-peer `PeerStat` (co-located so a bucket's own mutex covers
//! both, per the concurrency model's bucket-is-the-unit-of-atomicity
//! design).

use std::collections::HashMap;

use crate::domain::{Id, PeerAddress, Timestamp};

/// `firstSeen`/`lastSeenOnline`/`checked` for one tracked peer.
#[derive(Debug, Clone)]
pub struct PeerStat {
    pub first_seen: Timestamp,
    /// `Timestamp::ZERO` means "never observed online".
    pub last_seen_online: Timestamp,
    pub checked: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct BucketEntry {
    pub peer: PeerAddress,
    pub stat: PeerStat,
}

/// The mapping held by one bucket, guarded by that bucket's mutex.
#[derive(Debug, Default)]
pub(crate) struct BucketState {
    pub(crate) peers: HashMap<Id, BucketEntry>,
}

impl BucketState {
    pub fn new() -> Self {
        Self {
            peers: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.peers.contains_key(id)
    }

    /// The peer with the smallest `lastSeenOnline` (peers never seen
    /// online sort first, since their timestamp is zero).
    pub fn least_recently_online(&self) -> Option<Id> {
        self.peers
            .iter()
            .min_by_key(|(_, entry)| entry.stat.last_seen_online)
            .map(|(id, _)| *id)
    }

    /// Inserts `peer` if absent, otherwise updates its address fields in
    /// place and leaves its `PeerStat` untouched. Returns `true` iff a
    /// new entry was created.
    pub fn insert_or_update(&mut self, peer: PeerAddress, now: Timestamp) -> bool {
        if let Some(entry) = self.peers.get_mut(&peer.id) {
            entry.peer = peer;
            false
        } else {
            let stat = PeerStat {
                first_seen: now,
                last_seen_online: Timestamp::ZERO,
                checked: 0,
            };
            self.peers.insert(peer.id, BucketEntry { peer, stat });
            true
        }
    }

    pub fn remove(&mut self, id: &Id) -> Option<BucketEntry> {
        self.peers.remove(id)
    }

    pub fn address(&self, id: &Id) -> Option<PeerAddress> {
        self.peers.get(id).map(|entry| entry.peer.clone())
    }

    pub fn stat(&self, id: &Id) -> Option<&PeerStat> {
        self.peers.get(id).map(|entry| &entry.stat)
    }

    pub fn stat_mut(&mut self, id: &Id) -> Option<&mut PeerStat> {
        self.peers.get_mut(id).map(|entry| &mut entry.stat)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BucketEntry> {
        self.peers.values()
    }
}

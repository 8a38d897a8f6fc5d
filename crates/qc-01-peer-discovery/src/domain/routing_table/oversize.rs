//! The set of bucket indices whose size currently exceeds `bagSize`.
//!
//! Kept as a side index so eviction does not have to scan all 160
//! buckets to find a bucket worth shrinking.

use std::collections::HashSet;

use parking_lot::Mutex;

#[derive(Debug, Default)]
pub(crate) struct OversizeIndex {
    classes: Mutex<HashSet<usize>>,
}

impl OversizeIndex {
    pub fn new() -> Self {
        Self {
            classes: Mutex::new(HashSet::new()),
        }
    }

    pub fn add(&self, class: usize) {
        self.classes.lock().insert(class);
    }

    pub fn remove(&self, class: usize) {
        self.classes.lock().remove(&class);
    }

    /// A snapshot of currently-oversize bucket indices. No ordering is
    /// guaranteed, matching the spec's eviction-scan contract.
    pub fn snapshot(&self) -> Vec<usize> {
        self.classes.lock().iter().copied().collect()
    }
}

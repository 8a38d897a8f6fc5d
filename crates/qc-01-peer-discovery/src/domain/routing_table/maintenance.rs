//! Insertion-ordered peer → next-check-time mapping, drained by
//! `RoutingTable::peers_for_maintenance`.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{Id, Timestamp};

#[derive(Debug, Default)]
pub(crate) struct MaintenanceQueue {
    // `HashMap` preserves no order on its own; insertion order is
    // reconstructed from the companion `Vec` of ids so a drain returns
    // entries in the order they were scheduled, as the spec requires.
    order: Mutex<(Vec<Id>, HashMap<Id, Timestamp>)>,
}

impl MaintenanceQueue {
    pub fn new() -> Self {
        Self {
            order: Mutex::new((Vec::new(), HashMap::new())),
        }
    }

    /// Schedules (or reschedules) `id` for a check at `at`. Rescheduling
    /// an id already queued keeps its original position in the
    /// insertion order.
    pub fn schedule(&self, id: Id, at: Timestamp) {
        let mut guard = self.order.lock();
        let (order, times) = &mut *guard;
        if times.insert(id, at).is_none() {
            order.push(id);
        }
    }

    pub fn remove(&self, id: &Id) {
        let mut guard = self.order.lock();
        let (order, times) = &mut *guard;
        if times.remove(id).is_some() {
            order.retain(|existing| existing != id);
        }
    }

    /// Drains every entry whose scheduled time is `<= now`, in the
    /// order they were originally scheduled.
    pub fn drain_due(&self, now: Timestamp) -> Vec<Id> {
        let mut guard = self.order.lock();
        let (order, times) = &mut *guard;

        let mut due = Vec::new();
        order.retain(|id| {
            let Some(scheduled) = times.get(id) else {
                return false;
            };
            if *scheduled <= now {
                due.push(*id);
                times.remove(id);
                false
            } else {
                true
            }
        });
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(byte: u8) -> Id {
        let mut bytes = [0u8; 20];
        bytes[0] = byte;
        Id::new(bytes)
    }

    #[test]
    fn drains_only_due_entries_in_insertion_order() {
        let q = MaintenanceQueue::new();
        q.schedule(id(1), Timestamp::new(10));
        q.schedule(id(2), Timestamp::new(5));
        q.schedule(id(3), Timestamp::new(20));

        let due = q.drain_due(Timestamp::new(10));
        assert_eq!(due, vec![id(1), id(2)]);

        let second = q.drain_due(Timestamp::new(10));
        assert!(second.is_empty());

        let rest = q.drain_due(Timestamp::new(20));
        assert_eq!(rest, vec![id(3)]);
    }

    #[test]
    fn removing_an_id_drops_it_from_the_queue() {
        let q = MaintenanceQueue::new();
        q.schedule(id(1), Timestamp::new(0));
        q.remove(&id(1));
        assert!(q.drain_due(Timestamp::new(1000)).is_empty());
    }

    #[test]
    fn rescheduling_keeps_original_insertion_position() {
        let q = MaintenanceQueue::new();
        q.schedule(id(1), Timestamp::new(100));
        q.schedule(id(2), Timestamp::new(0));
        q.schedule(id(1), Timestamp::new(0));

        let due = q.drain_due(Timestamp::new(0));
        assert_eq!(due, vec![id(1), id(2)]);
    }
}

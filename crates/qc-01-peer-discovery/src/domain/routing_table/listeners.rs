//! Change and offline subscriber capability.
//!
//! Per the design notes' resolution of the source's listener-symmetry
//! ambiguity, registration and removal are symmetric: both take the same
//! lock and mutate the same `Vec`.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::PeerAddress;

/// A subscriber capability: any combination of the five events may be
/// implemented, the rest default to doing nothing.
///
/// Implementations must not call back into the `RoutingTable` from within
/// one of these methods — the notification pass holds the listener-list
/// lock for its duration, and reentrant calls that touch the same list
/// will deadlock.
pub trait RoutingTableListener: Send + Sync {
    fn inserted(&self, _peer: &PeerAddress) {}
    fn removed(&self, _peer: &PeerAddress) {}
    fn updated(&self, _peer: &PeerAddress) {}
    fn fail(&self, _peer: &PeerAddress) {}
    fn offline(&self, _peer: &PeerAddress) {}
}

#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Mutex<Vec<Arc<dyn RoutingTableListener>>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&self, listener: Arc<dyn RoutingTableListener>) {
        self.listeners.lock().push(listener);
    }

    pub fn remove(&self, listener: &Arc<dyn RoutingTableListener>) {
        self.listeners
            .lock()
            .retain(|existing| !Arc::ptr_eq(existing, listener));
    }

    fn notify(&self, peer: &PeerAddress, call: impl Fn(&dyn RoutingTableListener, &PeerAddress)) {
        for listener in self.listeners.lock().iter() {
            let listener = listener.as_ref();
            let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| call(listener, peer)));
            if let Err(panic) = outcome {
                tracing::warn!(peer_id = %peer.id, "routing table listener panicked: {:?}", panic);
            }
        }
    }

    pub fn notify_inserted(&self, peer: &PeerAddress) {
        self.notify(peer, RoutingTableListener::inserted);
    }

    pub fn notify_removed(&self, peer: &PeerAddress) {
        self.notify(peer, RoutingTableListener::removed);
    }

    pub fn notify_updated(&self, peer: &PeerAddress) {
        self.notify(peer, RoutingTableListener::updated);
    }

    pub fn notify_fail(&self, peer: &PeerAddress) {
        self.notify(peer, RoutingTableListener::fail);
    }

    pub fn notify_offline(&self, peer: &PeerAddress) {
        self.notify(peer, RoutingTableListener::offline);
    }
}

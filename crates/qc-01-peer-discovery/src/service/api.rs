use crate::domain::{Id, PeerAddress};
use crate::service::RoutingTableService;

impl RoutingTableService {
    /// Records that `remote` was observed alive, timestamping with the
    /// current time from this service's `TimeSource`.
    ///
    /// `referrer == None` denotes first-hand observation; `Some(_)`
    /// denotes second-hand (another peer told us about it).
    pub fn peer_online(&self, remote: PeerAddress, referrer: Option<Id>) -> bool {
        let now = self.now();
        self.routing_table.peer_online(remote, referrer, now)
    }

    /// Reports that `remote` failed, timestamping with the current time.
    /// Returns `true` iff the peer was removed as a result.
    pub fn peer_offline(&self, remote: &PeerAddress, force: bool) -> bool {
        let now = self.now();
        self.routing_table.peer_offline(remote, force, now)
    }
}

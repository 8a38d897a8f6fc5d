use crate::domain::PeerAddress;
use crate::service::RoutingTableService;

impl RoutingTableService {
    /// Drains and returns every peer whose scheduled liveness check is
    /// due right now. Call on a periodic timer; empty when maintenance
    /// is disabled (`maintenance_timeouts_secs` is empty).
    pub fn peers_for_maintenance(&self) -> Vec<PeerAddress> {
        let now = self.now();
        self.routing_table.peers_for_maintenance(now)
    }
}

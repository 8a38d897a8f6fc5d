use crate::domain::{Id, PeerAddress, RoutingTable, RoutingTableConfig, RoutingTableError, Timestamp};
use crate::ports::TimeSource;

/// Time-aware wrapper around a [`RoutingTable`].
///
/// The domain table is pure — every method takes `now: Timestamp`
/// explicitly. This service sources that argument from an injected
/// `TimeSource`, so host code never has to thread a clock through every
/// call site itself.
pub struct RoutingTableService {
    pub(crate) routing_table: RoutingTable,
    pub(crate) time_source: Box<dyn TimeSource>,
}

impl RoutingTableService {
    pub fn new(
        self_id: Id,
        config: RoutingTableConfig,
        time_source: Box<dyn TimeSource>,
    ) -> Result<Self, RoutingTableError> {
        Ok(Self {
            routing_table: RoutingTable::new(self_id, config)?,
            time_source,
        })
    }

    pub(crate) fn now(&self) -> Timestamp {
        self.time_source.now()
    }

    /// Direct access to the underlying table for callers that want the
    /// pure, `now`-explicit API.
    pub fn routing_table(&self) -> &RoutingTable {
        &self.routing_table
    }

    pub fn self_id(&self) -> Id {
        self.routing_table.self_id()
    }

    pub fn config(&self) -> &RoutingTableConfig {
        self.routing_table.config()
    }

    pub fn size(&self) -> usize {
        self.routing_table.size()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.routing_table.contains(id)
    }

    pub fn get_all(&self) -> Vec<PeerAddress> {
        self.routing_table.get_all()
    }

    pub fn close_peers(&self, id: &Id, at_least: usize) -> Vec<PeerAddress> {
        self.routing_table.close_peers(id, at_least)
    }

    pub fn is_peer_removed_temporarily(&self, id: &Id) -> bool {
        let now = self.now();
        self.routing_table.is_peer_removed_temporarily(id, now)
    }
}

use std::sync::Arc;

use crate::domain::RoutingTableListener;
use crate::service::RoutingTableService;

impl RoutingTableService {
    /// Registers a subscriber for insert/update/removal/offline
    /// notifications.
    pub fn add_listener(&self, listener: Arc<dyn RoutingTableListener>) {
        self.routing_table.add_listener(listener);
    }

    /// Removes a previously registered subscriber. A no-op if the
    /// listener was never added.
    pub fn remove_listener(&self, listener: &Arc<dyn RoutingTableListener>) {
        self.routing_table.remove_listener(listener);
    }
}

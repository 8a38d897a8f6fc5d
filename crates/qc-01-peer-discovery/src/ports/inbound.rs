//! Driving port: the public contract a host application depends on.
//!
//! `RoutingTableApi` mirrors `RoutingTable`'s inherent methods so callers
//! can depend on the trait rather than the concrete type. The concrete
//! `RoutingTable` implements it directly; nothing here widens or narrows
//! the contract described on the type itself.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::{Id, PeerAddress, RoutingTableConfig, RoutingTableListener, Timestamp};

pub trait RoutingTableApi {
    fn self_id(&self) -> Id;

    fn config(&self) -> &RoutingTableConfig;

    fn size(&self) -> usize;

    fn add_address_filter(&self, ip: IpAddr);

    fn add_listener(&self, listener: Arc<dyn RoutingTableListener>);

    fn remove_listener(&self, listener: &Arc<dyn RoutingTableListener>);

    fn contains(&self, id: &Id) -> bool;

    fn get_all(&self) -> Vec<PeerAddress>;

    fn close_peers(&self, id: &Id, at_least: usize) -> Vec<PeerAddress>;

    fn peers_for_maintenance(&self, now: Timestamp) -> Vec<PeerAddress>;

    fn peer_online(&self, remote: PeerAddress, referrer: Option<Id>, now: Timestamp) -> bool;

    fn peer_offline(&self, remote: &PeerAddress, force: bool, now: Timestamp) -> bool;

    fn is_peer_removed_temporarily(&self, id: &Id, now: Timestamp) -> bool;
}

impl RoutingTableApi for crate::domain::RoutingTable {
    fn self_id(&self) -> Id {
        crate::domain::RoutingTable::self_id(self)
    }

    fn config(&self) -> &RoutingTableConfig {
        crate::domain::RoutingTable::config(self)
    }

    fn size(&self) -> usize {
        crate::domain::RoutingTable::size(self)
    }

    fn add_address_filter(&self, ip: IpAddr) {
        crate::domain::RoutingTable::add_address_filter(self, ip)
    }

    fn add_listener(&self, listener: Arc<dyn RoutingTableListener>) {
        crate::domain::RoutingTable::add_listener(self, listener)
    }

    fn remove_listener(&self, listener: &Arc<dyn RoutingTableListener>) {
        crate::domain::RoutingTable::remove_listener(self, listener)
    }

    fn contains(&self, id: &Id) -> bool {
        crate::domain::RoutingTable::contains(self, id)
    }

    fn get_all(&self) -> Vec<PeerAddress> {
        crate::domain::RoutingTable::get_all(self)
    }

    fn close_peers(&self, id: &Id, at_least: usize) -> Vec<PeerAddress> {
        crate::domain::RoutingTable::close_peers(self, id, at_least)
    }

    fn peers_for_maintenance(&self, now: Timestamp) -> Vec<PeerAddress> {
        crate::domain::RoutingTable::peers_for_maintenance(self, now)
    }

    fn peer_online(&self, remote: PeerAddress, referrer: Option<Id>, now: Timestamp) -> bool {
        crate::domain::RoutingTable::peer_online(self, remote, referrer, now)
    }

    fn peer_offline(&self, remote: &PeerAddress, force: bool, now: Timestamp) -> bool {
        crate::domain::RoutingTable::peer_offline(self, remote, force, now)
    }

    fn is_peer_removed_temporarily(&self, id: &Id, now: Timestamp) -> bool {
        crate::domain::RoutingTable::is_peer_removed_temporarily(self, id, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoutingTable;

    fn self_id() -> Id {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xff;
        Id::new(bytes)
    }

    #[test]
    fn routing_table_satisfies_the_inbound_api() {
        fn assert_impls_api<T: RoutingTableApi>(_: &T) {}

        let table = RoutingTable::new(self_id(), RoutingTableConfig::for_testing()).unwrap();
        assert_impls_api(&table);
        assert_eq!(RoutingTableApi::size(&table), 0);
    }
}

//! Construction-time configuration for the routing table.

/// Immutable configuration, fixed at construction per §6 of the routing
/// table's external-interface contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTableConfig {
    /// Soft per-bucket capacity. `maxPeers = bag_size * 160`.
    pub bag_size: usize,
    /// LRU capacity of the offline log.
    pub cache_size: usize,
    /// Window, in milliseconds, within which `max_fail` failures remove a
    /// peer.
    pub cache_timeout_millis: u64,
    /// Failure count that, within `cache_timeout_millis`, triggers
    /// removal.
    pub max_fail: u32,
    /// Non-decreasing probe-interval ramp, in seconds. An empty sequence
    /// disables maintenance scheduling entirely.
    pub maintenance_timeouts_secs: Vec<u64>,
}

impl RoutingTableConfig {
    /// Hard global capacity implied by `bag_size`.
    pub fn max_peers(&self) -> usize {
        self.bag_size * 160
    }
}

impl Default for RoutingTableConfig {
    fn default() -> Self {
        Self {
            bag_size: 20,
            cache_size: 1000,
            cache_timeout_millis: 60_000,
            max_fail: 3,
            maintenance_timeouts_secs: vec![30, 60, 120, 300, 900],
        }
    }
}

impl RoutingTableConfig {
    /// Configuration suitable for unit tests: small capacities, short
    /// timeouts.
    pub fn for_testing() -> Self {
        Self {
            bag_size: 2,
            cache_size: 16,
            cache_timeout_millis: 10_000,
            max_fail: 3,
            maintenance_timeouts_secs: vec![1, 5, 30],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_peers_matches_bag_size_times_160() {
        let cfg = RoutingTableConfig::default();
        assert_eq!(cfg.max_peers(), cfg.bag_size * 160);
    }

    #[test]
    fn for_testing_uses_the_scenario_values_from_the_suite() {
        let cfg = RoutingTableConfig::for_testing();
        assert_eq!(cfg.bag_size, 2);
        assert_eq!(cfg.max_fail, 3);
        assert_eq!(cfg.maintenance_timeouts_secs, vec![1, 5, 30]);
    }
}

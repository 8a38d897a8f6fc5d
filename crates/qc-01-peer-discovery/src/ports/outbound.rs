//! Driven port: the one thing this subsystem requires from its host.
//!
//! The routing table itself is pure — every domain method takes `now:
//! Timestamp` as an argument rather than reading the clock. `TimeSource`
//! exists so the service layer that wraps the table can source that
//! argument from either the system clock or a fixed value in tests.

use crate::domain::Timestamp;

/// Abstract interface for reading the current time.
///
/// Enables deterministic testing by injecting controllable time sources;
/// production code uses [`SystemTimeSource`].
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Production `TimeSource`, backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Timestamp::new(millis)
    }
}

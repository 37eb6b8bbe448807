//! Injectable wall-clock source so readiness evaluation is deterministic
//! under test.

/// Supplies the current time in milliseconds since the Unix epoch.
///
/// A real implementation reads the system clock once per call; a test
/// implementation can return a fixed or scripted sequence of values.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// `Clock` backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_returns_a_plausible_timestamp() {
        let clock = SystemClock;
        // Any time after 2020-01-01 in ms since epoch.
        assert!(clock.now_ms() > 1_577_836_800_000);
    }
}

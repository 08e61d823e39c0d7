// Run counters

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counters and timestamps for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub suites: usize,
    pub tests: usize,
    pub passes: usize,
    pub pending: usize,
    pub failures: usize,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl RunStats {
    /// Wall-clock duration, once both ends of the run are known
    pub fn duration_ms(&self) -> Option<u64> {
        let (start, end) = (self.start?, self.end?);
        let millis = (end - start).num_milliseconds();
        Some(millis.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_default_stats_are_zero() {
        let stats = RunStats::default();
        assert_eq!(stats.suites, 0);
        assert_eq!(stats.tests, 0);
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.failures, 0);
        assert!(stats.duration_ms().is_none());
    }

    #[test]
    fn test_duration_ms() {
        let start = Utc::now();
        let stats = RunStats {
            start: Some(start),
            end: Some(start + Duration::milliseconds(250)),
            ..RunStats::default()
        };
        assert_eq!(stats.duration_ms(), Some(250));
    }
}

// State module - per-run accumulation
// Counters, root-suite groups and individually tracked tests for one run

pub mod result;
pub mod stats;
pub mod suite;

pub use result::{TestCase, TestState};
pub use stats::RunStats;
pub use suite::{SuiteId, SuiteRef, SuiteTree};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Accumulated state of a single run
#[derive(Debug, Clone, Default)]
pub struct RunState {
    stats: RunStats,
    groups: IndexMap<String, Vec<TestCase>>,
    tracked: Vec<TestCase>,
    completed: HashSet<SuiteId>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run, discarding anything left from a previous one
    pub fn begin(&mut self, now: DateTime<Utc>) {
        *self = Self::default();
        self.stats.start = Some(now);
    }

    pub fn record_suite_begin(&mut self, suite: SuiteRef<'_>) {
        if !suite.is_root() {
            self.stats.suites += 1;
        }
    }

    /// Fold the suite's own tests into the group of its topmost titled ancestor
    pub fn record_suite_end(&mut self, suite: SuiteRef<'_>) {
        if suite.is_root() {
            return;
        }

        if !self.completed.insert(suite.id()) {
            warn!(
                "Suite '{}' completed more than once, ignoring repeat",
                suite.title()
            );
            return;
        }

        let topmost = suite.topmost_titled();
        debug!(
            "Suite '{}' adds {} test(s) to group '{}'",
            suite.title(),
            suite.tests().len(),
            topmost.title()
        );

        self.groups
            .entry(topmost.title().to_string())
            .or_default()
            .extend(suite.tests().iter().cloned());
    }

    pub fn record_test_end(&mut self) {
        self.stats.tests += 1;
    }

    pub fn record_test_pass(&mut self, test: &TestCase) {
        self.tracked.push(test.clone());
    }

    pub fn record_test_fail(&mut self, test: &TestCase) {
        self.tracked.push(test.clone());
        self.stats.failures += 1;
    }

    /// Close the run. `passes` carries the number of fully successful groups.
    pub fn finish(&mut self, successful_groups: usize, now: DateTime<Utc>) {
        self.stats.passes = successful_groups;
        self.stats.end = Some(now);
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Tests per topmost titled suite, in first-completion order
    pub fn groups(&self) -> &IndexMap<String, Vec<TestCase>> {
        &self.groups
    }

    /// Tests in the order their pass or fail event arrived
    pub fn tracked(&self) -> &[TestCase] {
        &self.tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_group() -> (SuiteTree, SuiteId, SuiteId) {
        let mut tree = SuiteTree::new();
        let root = tree.add_root();
        let group = tree.add_suite("Group 1", Some(root));
        (tree, root, group)
    }

    #[test]
    fn test_begin_resets_previous_run() {
        let (tree, _, group) = tree_with_group();
        let mut state = RunState::new();
        state.record_suite_begin(tree.get(group).unwrap());
        state.record_test_fail(&TestCase::failed("x", None));

        state.begin(Utc::now());

        assert_eq!(state.stats().suites, 0);
        assert_eq!(state.stats().failures, 0);
        assert!(state.tracked().is_empty());
        assert!(state.stats().start.is_some());
    }

    #[test]
    fn test_root_suite_is_not_counted() {
        let (tree, root, group) = tree_with_group();
        let mut state = RunState::new();
        state.record_suite_begin(tree.get(root).unwrap());
        state.record_suite_begin(tree.get(group).unwrap());
        assert_eq!(state.stats().suites, 1);
    }

    #[test]
    fn test_root_suite_end_creates_no_group() {
        let (mut tree, root, _) = tree_with_group();
        tree.add_test(root, TestCase::passed("top level test"));
        let mut state = RunState::new();
        state.record_suite_end(tree.get(root).unwrap());
        assert!(state.groups().is_empty());
    }

    #[test]
    fn test_nested_suites_share_a_group() {
        let (mut tree, _, group) = tree_with_group();
        let inner = tree.add_suite("inner", Some(group));
        tree.add_test(inner, TestCase::passed("inner test"));
        tree.add_test(group, TestCase::passed("outer test"));

        let mut state = RunState::new();
        state.record_suite_end(tree.get(inner).unwrap());
        state.record_suite_end(tree.get(group).unwrap());

        let titles: Vec<_> = state.groups()["Group 1"]
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["inner test", "outer test"]);
    }

    #[test]
    fn test_repeated_suite_end_is_ignored() {
        let (mut tree, _, group) = tree_with_group();
        tree.add_test(group, TestCase::passed("a"));

        let mut state = RunState::new();
        state.record_suite_end(tree.get(group).unwrap());
        state.record_suite_end(tree.get(group).unwrap());

        assert_eq!(state.groups()["Group 1"].len(), 1);
    }

    #[test]
    fn test_fail_counts_and_tracks() {
        let mut state = RunState::new();
        state.record_test_pass(&TestCase::passed("a"));
        state.record_test_fail(&TestCase::failed("b", Some("boom".into())));
        state.record_test_end();
        state.record_test_end();

        assert_eq!(state.stats().tests, 2);
        assert_eq!(state.stats().failures, 1);
        assert_eq!(state.tracked().len(), 2);
    }

    #[test]
    fn test_finish_sets_passes_and_end() {
        let mut state = RunState::new();
        state.begin(Utc::now());
        state.finish(3, Utc::now());
        assert_eq!(state.stats().passes, 3);
        assert!(state.stats().duration_ms().is_some());
    }
}

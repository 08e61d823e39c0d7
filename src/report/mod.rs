// Report module - lifecycle event listeners and report output

pub mod console;
pub mod grouped;
pub mod json;
pub mod schema;

use crate::state::{SuiteRef, TestCase};
use anyhow::Result;

pub use console::ConsoleSummary;
pub use grouped::GroupedReporter;
pub use json::JsonFileSink;
pub use schema::{Category, CheckReport, Counts, Detail, FileReport, GENERAL_KEY};

/// Listener for the lifecycle events of one run.
///
/// Events arrive one at a time: `on_run_begin`, then suite and test events in
/// depth-first order, then `on_run_end`.
pub trait Reporter {
    /// Called once before anything else
    fn on_run_begin(&mut self);

    /// Called when a suite starts, the root suite included
    fn on_suite_begin(&mut self, suite: SuiteRef<'_>);

    /// Called when a suite and all of its descendants have finished
    fn on_suite_end(&mut self, suite: SuiteRef<'_>);

    /// Called when a test passes
    fn on_test_pass(&mut self, test: &TestCase);

    /// Called when a test fails
    fn on_test_fail(&mut self, test: &TestCase);

    /// Called for every test after its outcome, whatever it was
    fn on_test_end(&mut self, test: &TestCase);

    /// Called once when the run is over
    fn on_run_end(&mut self) -> Result<()>;
}

// Grouped reporter - accumulates a run and emits the grouped check report

use super::schema::CheckReport;
use super::{JsonFileSink, Reporter};
use crate::config::{ReportConfig, ReporterOptions};
use crate::state::{RunState, RunStats, SuiteRef, TestCase};
use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

/// Groups tests under their top-level suite and reports failures individually
pub struct GroupedReporter {
    options: ReporterOptions,
    meta: ReportConfig,
    state: RunState,
    report_data: Option<String>,
}

impl GroupedReporter {
    pub fn new(options: ReporterOptions, meta: ReportConfig) -> Self {
        Self {
            options,
            meta,
            state: RunState::new(),
            report_data: None,
        }
    }

    /// Counters of the current or last run
    pub fn stats(&self) -> &RunStats {
        self.state.stats()
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Serialized report of the last finished run, kept when `save_json_var` is set
    pub fn report_data(&self) -> Option<&str> {
        self.report_data.as_deref()
    }

    /// Build the report from the current state without touching it
    pub fn build_report(&self) -> CheckReport {
        CheckReport::build(&self.state, &self.meta)
    }
}

impl Default for GroupedReporter {
    fn default() -> Self {
        Self::new(ReporterOptions::default(), ReportConfig::default())
    }
}

impl Reporter for GroupedReporter {
    fn on_run_begin(&mut self) {
        debug!("Run started");
        self.report_data = None;
        self.state.begin(Utc::now());
    }

    fn on_suite_begin(&mut self, suite: SuiteRef<'_>) {
        self.state.record_suite_begin(suite);
    }

    fn on_suite_end(&mut self, suite: SuiteRef<'_>) {
        self.state.record_suite_end(suite);
    }

    fn on_test_pass(&mut self, test: &TestCase) {
        debug!("Test passed: {}", test.title);
        self.state.record_test_pass(test);
    }

    fn on_test_fail(&mut self, test: &TestCase) {
        debug!("Test failed: {} ({})", test.title, test.failure_message());
        self.state.record_test_fail(test);
    }

    fn on_test_end(&mut self, _test: &TestCase) {
        self.state.record_test_end();
    }

    fn on_run_end(&mut self) -> Result<()> {
        let report = self.build_report();
        let report_data = report.to_json()?;

        if !self.options.quiet {
            println!("{}", report_data);
        }

        if self.options.save_json_file {
            let sink = JsonFileSink::new(self.options.report_path());
            sink.write(&report_data)?;
            info!("Report written to {}", sink.path().display());
        }

        if self.options.save_json_var {
            self.report_data = Some(report_data);
        }

        self.state.finish(report.counts.notice, Utc::now());
        info!(
            "Run finished: {} suites, {} tests, {} failures",
            self.state.stats().suites,
            self.state.stats().tests,
            self.state.stats().failures
        );

        Ok(())
    }
}

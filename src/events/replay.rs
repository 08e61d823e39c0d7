// Replays a decoded event stream into a reporter
//
// Wire ids are mapped onto a local `SuiteTree`, so reporters only ever see
// suites that were announced by `suite_begin`.

use super::RunEvent;
use crate::report::Reporter;
use crate::state::{SuiteId, SuiteTree, TestCase};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: invalid event: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: '{event}' received outside of run_begin/run_end")]
    OutsideRun { line: usize, event: &'static str },

    #[error("line {line}: unknown suite id {id}")]
    UnknownSuite { line: usize, id: u64 },

    #[error("line {line}: suite id {id} announced twice")]
    DuplicateSuite { line: usize, id: u64 },

    #[error("line {line}: suite {id} refers to unknown parent {parent}")]
    UnknownParent { line: usize, id: u64, parent: u64 },

    #[error("event stream ended before run_end")]
    Incomplete,

    #[error("reporter failed at run end: {0:#}")]
    Reporter(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Finished,
}

/// Drives a `Reporter` from wire events
pub struct EventReplayer<R: Reporter> {
    reporter: R,
    tree: SuiteTree,
    ids: HashMap<u64, SuiteId>,
    // Last test that passed or failed, awaiting its test_end
    awaiting_end: Option<(SuiteId, TestCase)>,
    phase: Phase,
    line: usize,
}

impl<R: Reporter> EventReplayer<R> {
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            tree: SuiteTree::new(),
            ids: HashMap::new(),
            awaiting_end: None,
            phase: Phase::Idle,
            line: 0,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Decode and dispatch one NDJSON line. Blank lines are skipped.
    pub fn feed_line(&mut self, line: &str) -> Result<(), ReplayError> {
        self.line += 1;
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let event = RunEvent::from_line(line).map_err(|source| ReplayError::Decode {
            line: self.line,
            source,
        })?;
        self.dispatch(event)
    }

    pub fn dispatch(&mut self, event: RunEvent) -> Result<(), ReplayError> {
        debug!("Event {}", event.kind());

        match event {
            RunEvent::RunBegin => {
                if self.phase == Phase::Running {
                    return Err(self.outside_run("run_begin"));
                }
                self.tree = SuiteTree::new();
                self.ids.clear();
                self.awaiting_end = None;
                self.phase = Phase::Running;
                self.reporter.on_run_begin();
            }
            other if self.phase != Phase::Running => {
                return Err(self.outside_run(other.kind()));
            }
            RunEvent::SuiteBegin {
                id,
                title,
                parent,
                root,
            } => {
                if self.ids.contains_key(&id) {
                    return Err(ReplayError::DuplicateSuite {
                        line: self.line,
                        id,
                    });
                }
                let parent_id = match parent {
                    Some(parent) => Some(*self.ids.get(&parent).ok_or(
                        ReplayError::UnknownParent {
                            line: self.line,
                            id,
                            parent,
                        },
                    )?),
                    None => None,
                };

                let suite_id = self.tree.insert(title, parent_id, root);
                self.ids.insert(id, suite_id);
                if let Some(suite) = self.tree.get(suite_id) {
                    self.reporter.on_suite_begin(suite);
                }
            }
            RunEvent::SuiteEnd { id } => {
                let suite_id = self.resolve(id)?;
                if let Some(suite) = self.tree.get(suite_id) {
                    self.reporter.on_suite_end(suite);
                }
            }
            RunEvent::TestPass { suite, title } => {
                let suite_id = self.resolve(suite)?;
                let test = TestCase::passed(title);
                self.tree.add_test(suite_id, test.clone());
                self.reporter.on_test_pass(&test);
                self.awaiting_end = Some((suite_id, test));
            }
            RunEvent::TestFail {
                suite,
                title,
                error,
            } => {
                let suite_id = self.resolve(suite)?;
                let test = TestCase::failed(title, error);
                self.tree.add_test(suite_id, test.clone());
                self.reporter.on_test_fail(&test);
                self.awaiting_end = Some((suite_id, test));
            }
            RunEvent::TestEnd { suite, title } => {
                let suite_id = self.resolve(suite)?;
                let test = match self.awaiting_end.take() {
                    Some((id, test)) if id == suite_id && test.title == title => test,
                    _ => {
                        // Neither passed nor failed, e.g. skipped by the engine
                        let test = TestCase::pending(title);
                        self.tree.add_test(suite_id, test.clone());
                        test
                    }
                };
                self.reporter.on_test_end(&test);
            }
            RunEvent::RunEnd => {
                if self.awaiting_end.is_some() {
                    warn!("Run ended with a test still awaiting test_end");
                }
                self.phase = Phase::Finished;
                self.reporter.on_run_end().map_err(ReplayError::Reporter)?;
            }
        }

        Ok(())
    }

    /// Hand back the reporter once the run is complete
    pub fn finish(self) -> Result<R, ReplayError> {
        if self.phase != Phase::Finished {
            return Err(ReplayError::Incomplete);
        }
        Ok(self.reporter)
    }

    fn resolve(&self, id: u64) -> Result<SuiteId, ReplayError> {
        self.ids
            .get(&id)
            .copied()
            .ok_or(ReplayError::UnknownSuite {
                line: self.line,
                id,
            })
    }

    fn outside_run(&self, event: &'static str) -> ReplayError {
        ReplayError::OutsideRun {
            line: self.line,
            event,
        }
    }
}

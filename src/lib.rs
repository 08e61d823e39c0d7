pub mod cli;
pub mod config;
pub mod events;
pub mod logging;
pub mod report;
pub mod state;

pub use events::{EventReplayer, ReplayError, RunEvent};
pub use report::{CheckReport, GroupedReporter, Reporter};

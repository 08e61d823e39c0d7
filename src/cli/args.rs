// CLI argument definitions using Clap

use clap::Parser;
use std::path::PathBuf;

/// Aggregate test lifecycle events into a grouped report
#[derive(Parser, Debug)]
#[command(name = "grouped-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Group test results by top-level suite and report failures",
    long_about = None
)]
pub struct Cli {
    /// NDJSON event stream to read (stdin when omitted or '-')
    #[arg(value_name = "EVENTS")]
    pub events: Option<PathBuf>,

    /// Do not print the report to stdout
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,

    /// Write the report to a file
    #[arg(long, default_value_t = false)]
    pub save_json_file: bool,

    /// Report file name (implies --save-json-file)
    #[arg(long, value_name = "FILE")]
    pub report_file: Option<PathBuf>,

    /// Report name
    #[arg(long)]
    pub name: Option<String>,

    /// Report description
    #[arg(long)]
    pub description: Option<String>,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(short = 'c', long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Show current configuration and exit
    #[arg(long, default_value_t = false)]
    pub config: bool,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

impl Cli {
    /// Event source path, `None` meaning stdin
    pub fn events_path(&self) -> Option<&PathBuf> {
        self.events
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}

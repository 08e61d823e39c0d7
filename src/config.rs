// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::Cli;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub reporter: ReporterOptions,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the finished report goes
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReporterOptions {
    /// Do not print the report to stdout
    #[serde(default)]
    pub quiet: bool,

    /// Keep the serialized report in memory after the run
    #[serde(default)]
    pub save_json_var: bool,

    /// Write the serialized report to `report_file_name`
    #[serde(default)]
    pub save_json_file: bool,

    /// Report file name, `grouped-report.json` when empty
    #[serde(default)]
    pub report_file_name: String,
}

impl ReporterOptions {
    pub fn report_path(&self) -> PathBuf {
        if self.report_file_name.is_empty() {
            PathBuf::from(DEFAULT_REPORT_FILE)
        } else {
            PathBuf::from(&self.report_file_name)
        }
    }
}

/// Header fields of the generated report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    #[serde(default = "default_report_name")]
    pub name: String,

    #[serde(default = "default_report_name")]
    pub description: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: default_report_name(),
            description: default_report_name(),
        }
    }
}

pub const DEFAULT_REPORT_FILE: &str = "grouped-report.json";

pub fn default_report_name() -> String {
    String::from("Grouped unit tests")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .groupedreportrc (current directory)
        // 2. ~/.groupedreportrc (home directory)
        // 3. .groupedreportrc.toml (current directory)
        // 4. ~/.groupedreportrc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;

        let paths = [
            cwd.join(".groupedreportrc"),
            home.join(".groupedreportrc"),
            cwd.join(".groupedreportrc.toml"),
            home.join(".groupedreportrc.toml"),
        ];

        paths
            .iter()
            .find(|path| path.exists())
            .and_then(|path| Self::load_from_file(path))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        match toml::from_str(content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring invalid configuration: {}", e);
                None
            }
        }
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// Command-line flags win over file values
    pub fn merge_cli(&mut self, cli: &Cli) {
        if cli.quiet {
            self.reporter.quiet = true;
        }
        if cli.save_json_file {
            self.reporter.save_json_file = true;
        }
        if let Some(ref file) = cli.report_file {
            self.reporter.save_json_file = true;
            self.reporter.report_file_name = file.display().to_string();
        }
        if let Some(ref name) = cli.name {
            self.report.name = name.clone();
        }
        if let Some(ref description) = cli.description {
            self.report.description = description.clone();
        }
    }
}

// JSON file sink - persists the serialized report

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a finished report to disk
pub struct JsonFileSink {
    output_path: PathBuf,
}

impl JsonFileSink {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn path(&self) -> &Path {
        &self.output_path
    }

    /// Write the report followed by a newline, creating parent directories
    pub fn write(&self, report_data: &str) -> Result<()> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }

        let mut file = File::create(&self.output_path).with_context(|| {
            format!(
                "Failed to create JSON report file: {}",
                self.output_path.display()
            )
        })?;

        writeln!(file, "{}", report_data).with_context(|| {
            format!(
                "Failed to write JSON report file: {}",
                self.output_path.display()
            )
        })?;

        Ok(())
    }
}

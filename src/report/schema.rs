// Grouped check report - the serialized artifact of a run

use crate::config::ReportConfig;
use crate::state::{RunState, TestCase};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the only block in `byFile`
pub const GENERAL_KEY: &str = "General";

/// Entry counts per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub failure: usize,
    pub warning: usize,
    pub notice: usize,
}

/// Detail entry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Notice,
    Failure,
}

/// One line item of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    #[serde(rename = "Id")]
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_details: Option<String>,
}

impl Detail {
    /// Notice for a group whose every test passed
    fn success(index: usize, group: &str, tests: &[TestCase]) -> Self {
        let titles: Vec<&str> = tests.iter().map(|t| t.title.as_str()).collect();
        Self {
            id: format!("success-{}", index),
            title: group.to_string(),
            message: format!("{} tests passed", tests.len()),
            category: Category::Notice,
            raw_details: Some(titles.join("\n")),
        }
    }

    fn failure(index: usize, test: &TestCase) -> Self {
        Self {
            id: format!("failure-{}", index),
            title: test.title.clone(),
            message: test.failure_message().to_string(),
            category: Category::Failure,
            raw_details: None,
        }
    }
}

/// Details block stored under `byFile`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub summary: String,
    pub counts: Counts,
    pub details: Vec<Detail>,
}

/// Complete report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub name: String,
    pub description: String,
    pub summary: String,
    pub counts: Counts,
    pub by_file: BTreeMap<String, FileReport>,
}

impl CheckReport {
    /// Derive the report from a finished run.
    ///
    /// Only groups where every test passed get a notice. Passing tests of any
    /// other group are not reported; their failing siblings show up as
    /// individual failure entries, in the order they failed.
    pub fn build(state: &RunState, meta: &ReportConfig) -> Self {
        let successes: Vec<Detail> = state
            .groups()
            .iter()
            .filter(|(_, tests)| tests.iter().all(TestCase::is_passed))
            .enumerate()
            .map(|(i, (group, tests))| Detail::success(i, group, tests))
            .collect();

        let failures: Vec<Detail> = state
            .tracked()
            .iter()
            .filter(|t| !t.is_passed())
            .enumerate()
            .map(|(i, test)| Detail::failure(i, test))
            .collect();

        let counts = Counts {
            failure: failures.len(),
            warning: 0,
            notice: successes.len(),
        };

        let mut details = successes;
        details.extend(failures);

        let mut by_file = BTreeMap::new();
        by_file.insert(
            GENERAL_KEY.to_string(),
            FileReport {
                summary: String::new(),
                counts,
                details,
            },
        );

        Self {
            name: meta.name.clone(),
            description: meta.description.clone(),
            summary: String::new(),
            counts,
            by_file,
        }
    }

    /// Details of the `General` block
    pub fn details(&self) -> &[Detail] {
        self.by_file
            .get(GENERAL_KEY)
            .map(|block| block.details.as_slice())
            .unwrap_or_default()
    }

    /// Two-space indented JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize grouped report")
    }
}

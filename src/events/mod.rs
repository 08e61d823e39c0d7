// Lifecycle events on the wire - one JSON object per line

pub mod replay;

pub use replay::{EventReplayer, ReplayError};

use serde::{Deserialize, Serialize};

/// Lifecycle event as emitted by a test engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    RunBegin,

    SuiteBegin {
        id: u64,
        #[serde(default)]
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parent: Option<u64>,
        #[serde(default)]
        root: bool,
    },

    SuiteEnd {
        id: u64,
    },

    TestPass {
        suite: u64,
        title: String,
    },

    TestFail {
        suite: u64,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },

    TestEnd {
        suite: u64,
        title: String,
    },

    RunEnd,
}

impl RunEvent {
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Wire name of the event
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RunBegin => "run_begin",
            Self::SuiteBegin { .. } => "suite_begin",
            Self::SuiteEnd { .. } => "suite_end",
            Self::TestPass { .. } => "test_pass",
            Self::TestFail { .. } => "test_fail",
            Self::TestEnd { .. } => "test_end",
            Self::RunEnd => "run_end",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_suite() {
        let event =
            RunEvent::from_line(r#"{"event":"suite_begin","id":0,"title":"","root":true}"#)
                .unwrap();
        assert_eq!(
            event,
            RunEvent::SuiteBegin {
                id: 0,
                title: String::new(),
                parent: None,
                root: true
            }
        );
    }

    #[test]
    fn test_parse_fail_without_error() {
        let event =
            RunEvent::from_line(r#"{"event":"test_fail","suite":1,"title":"divides"}"#).unwrap();
        assert_eq!(
            event,
            RunEvent::TestFail {
                suite: 1,
                title: "divides".to_string(),
                error: None
            }
        );
        assert_eq!(event.kind(), "test_fail");
    }

    #[test]
    fn test_parse_unknown_event() {
        assert!(RunEvent::from_line(r#"{"event":"test_retry","suite":1}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_event_tag() {
        let json = serde_json::to_string(&RunEvent::RunEnd).unwrap();
        assert_eq!(json, r#"{"event":"run_end"}"#);
    }
}

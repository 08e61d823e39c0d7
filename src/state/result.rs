// Test case snapshots captured from lifecycle events

use serde::{Deserialize, Serialize};

/// Message used for failure entries whose test carries no error text
pub const FALLBACK_ERROR_MESSAGE: &str = "Error";

/// Terminal state of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    Passed,
    Failed,
    Pending,
}

/// Test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub title: String,
    pub state: TestState,
    pub error_message: Option<String>,
}

impl TestCase {
    /// Create a passed test
    pub fn passed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: TestState::Passed,
            error_message: None,
        }
    }

    /// Create a failed test, optionally carrying the error's message
    pub fn failed(title: impl Into<String>, error_message: Option<String>) -> Self {
        Self {
            title: title.into(),
            state: TestState::Failed,
            error_message,
        }
    }

    /// Create a test that finished without passing or failing
    pub fn pending(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: TestState::Pending,
            error_message: None,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.state == TestState::Passed
    }

    /// Message shown in a failure entry. Absent and empty messages both fall back.
    pub fn failure_message(&self) -> &str {
        match self.error_message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => FALLBACK_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_case_passed() {
        let test = TestCase::passed("adds numbers");
        assert_eq!(test.title, "adds numbers");
        assert_eq!(test.state, TestState::Passed);
        assert!(test.is_passed());
        assert!(test.error_message.is_none());
    }

    #[test]
    fn test_test_case_failed_keeps_message() {
        let test = TestCase::failed("divides", Some("expected 1 got 2".to_string()));
        assert_eq!(test.state, TestState::Failed);
        assert!(!test.is_passed());
        assert_eq!(test.failure_message(), "expected 1 got 2");
    }

    #[test]
    fn test_test_case_failed_without_message_falls_back() {
        let test = TestCase::failed("divides", None);
        assert_eq!(test.failure_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_test_case_failed_with_empty_message_falls_back() {
        let test = TestCase::failed("divides", Some(String::new()));
        assert_eq!(test.failure_message(), "Error");
    }

    #[test]
    fn test_test_case_pending_is_not_passed() {
        let test = TestCase::pending("todo");
        assert_eq!(test.state, TestState::Pending);
        assert!(!test.is_passed());
    }

    #[test]
    fn test_test_state_serializes_lowercase() {
        let json = serde_json::to_string(&TestState::Passed).unwrap();
        assert_eq!(json, "\"passed\"");
    }
}

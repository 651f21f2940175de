//! Result and error types for the suite.

use thiserror::Error;

use crate::locator::Locator;

/// Result type for suite operations
pub type E2eResult<T> = Result<T, E2eError>;

/// Errors that can occur while driving the browser
#[derive(Debug, Error)]
pub enum E2eError {
    /// A required element did not appear within its bounded wait
    #[error("element not found: {locator} (waited {timeout_ms}ms)")]
    ElementNotFound {
        /// Locator that produced no match
        locator: Locator,
        /// Wait deadline that elapsed
        timeout_ms: u64,
    },

    /// The browser is not showing the screen a page object expects
    #[error("illegal state: {message}")]
    IllegalState {
        /// What was expected and what was found
        message: String,
    },

    /// A bounded wait on a page-level condition elapsed
    #[error("timed out after {ms}ms waiting for {condition}")]
    Timeout {
        /// Deadline that elapsed
        ms: u64,
        /// Condition that never became true
        condition: String,
    },

    /// Window-handle bookkeeping failed (zero or several new windows)
    #[error("window not found: {message}")]
    WindowNotFound {
        /// What went wrong
        message: String,
    },

    /// Fixture file could not be read or parsed
    #[error("fixture data error in {path}: {message}")]
    DataFormat {
        /// Offending file
        path: String,
        /// Parse or read failure
        message: String,
    },

    /// Browser session setup or teardown failed
    #[error("fixture error: {message}")]
    Fixture {
        /// What failed during setup/teardown
        message: String,
    },

    /// Underlying WebDriver failure
    #[error("webdriver error: {0}")]
    Driver(#[from] thirtyfour::error::WebDriverError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl E2eError {
    /// Build an `IllegalState` error
    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }

    /// True for failures that only mean "the element is not there",
    /// used by tolerant lookups such as validation-message fallbacks.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
            || matches!(
                self,
                Self::Driver(e) if matches!(
                    e.as_inner(),
                    thirtyfour::error::WebDriverErrorInner::NoSuchElement(_)
                )
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::{Locator, Strategy};

    #[test]
    fn element_not_found_names_the_locator() {
        let err = E2eError::ElementNotFound {
            locator: Locator::new(Strategy::Id, "email"),
            timeout_ms: 10_000,
        };
        let text = err.to_string();
        assert!(text.contains("email"));
        assert!(text.contains("10000ms"));
    }

    #[test]
    fn illegal_state_constructor() {
        let err = E2eError::illegal_state("wrong page: Login");
        assert!(matches!(err, E2eError::IllegalState { .. }));
        assert!(err.to_string().contains("wrong page: Login"));
    }

    #[test]
    fn is_not_found_matches_element_lookup_failures_only() {
        let missing = E2eError::ElementNotFound {
            locator: Locator::new(Strategy::Css, "#date ~ .invalid-feedback"),
            timeout_ms: 500,
        };
        assert!(missing.is_not_found());

        let timeout = E2eError::Timeout {
            ms: 500,
            condition: "title contains Login".into(),
        };
        assert!(!timeout.is_not_found());
    }
}

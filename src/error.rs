//! Error types for the PDKS report assistant.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Most failures in the assistant are absorbed locally (fallback department
//! list, empty record sets); the variants here cover what cannot be absorbed.

use thiserror::Error;

/// The main error type for the PDKS report assistant.
///
/// # Example
///
/// ```
/// use pdks_assistant::error::AssistantError;
///
/// let error = AssistantError::ConfigNotFound {
///     path: "/missing/assistant.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/assistant.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The attendance store could not serve a read.
    #[error("Attendance store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// A month code outside "01".."12" was supplied.
    #[error("Invalid month code: '{code}'")]
    InvalidMonth {
        /// The rejected month code.
        code: String,
    },

    /// The requested year/month cannot be represented as a calendar range.
    #[error("Invalid report period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// A request field was invalid.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return AssistantError.
pub type AssistantResult<T> = Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = AssistantError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_store_unavailable_displays_message() {
        let error = AssistantError::StoreUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance store unavailable: connection refused"
        );
    }

    #[test]
    fn test_invalid_month_displays_code() {
        let error = AssistantError::InvalidMonth {
            code: "13".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month code: '13'");
    }

    #[test]
    fn test_invalid_period_pads_month() {
        let error = AssistantError::InvalidPeriod {
            year: 999_999,
            month: 3,
        };
        assert_eq!(error.to_string(), "Invalid report period 999999-03");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AssistantError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_store_error() -> AssistantResult<()> {
            Err(AssistantError::StoreUnavailable {
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> AssistantResult<()> {
            returns_store_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

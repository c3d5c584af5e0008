//! Request types for the report assistant API.
//!
//! `POST /report` takes a [`ReportRequest`](crate::models::ReportRequest)
//! directly; this module holds the bodies that exist only on the wire.

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, AssistantResult};

/// Request body for the `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The free-text request.
    pub prompt: String,
}

impl ChatRequest {
    /// Rejects blank prompts.
    pub fn validate(&self) -> AssistantResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(AssistantError::InvalidRequest {
                field: "prompt".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Years a report may be requested for.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=9999;

/// Rejects report years outside [`YEAR_RANGE`].
pub fn validate_year(year: Option<i32>) -> AssistantResult<()> {
    match year {
        Some(year) if !YEAR_RANGE.contains(&year) => Err(AssistantError::InvalidRequest {
            field: "year".to_string(),
            message: format!(
                "{year} is outside {}..={}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chat_request() {
        let request: ChatRequest = serde_json::from_str(r#"{"prompt": "IT mart raporu"}"#).unwrap();
        assert_eq!(request.prompt, "IT mart raporu");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_prompt_is_rejected() {
        let request = ChatRequest {
            prompt: "   ".to_string(),
        };
        match request.validate() {
            Err(AssistantError::InvalidRequest { field, .. }) => assert_eq!(field, "prompt"),
            other => panic!("Expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(None).is_ok());
        assert!(validate_year(Some(2026)).is_ok());
        assert!(validate_year(Some(12)).is_err());
        assert!(validate_year(Some(100_000)).is_err());
    }
}

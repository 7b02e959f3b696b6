use serde::Serialize;
use crate::models::domain::ScoredInternship;

pub const NO_INTERNSHIPS_MESSAGE: &str = "No internships found";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON input";

/// Response for a matching run
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredInternship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResponse {
    pub fn found(matches: Vec<ScoredInternship>) -> Self {
        Self { matches, error: None }
    }

    /// Well-formed response for an empty candidate set
    pub fn no_internships() -> Self {
        Self {
            matches: Vec::new(),
            error: Some(NO_INTERNSHIPS_MESSAGE.to_string()),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn invalid_input() -> Self {
        Self {
            error: INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}

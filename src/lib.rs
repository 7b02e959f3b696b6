//! Internship Matcher - heuristic internship recommendations
//!
//! This library scores internship postings against a user's stated
//! preferences and ranks the best matches. The binary reads one JSON
//! payload from stdin and writes one JSON document to stdout.

pub mod config;
pub mod core;
pub mod error;
pub mod handler;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, calculate_match_score, normalize_skills};
pub use error::MatchError;
pub use models::{UserProfile, Internship, ScoredInternship, Score, MatchRequest, MatchResponse, ErrorResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let tokens = normalize_skills("Rust, SQL");
        assert_eq!(tokens, vec!["rust", "sql"]);
    }
}

use thiserror::Error;

/// Errors that can end a matching run
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid JSON input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("No internships found")]
    EmptyCandidateSet,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// Process exit status for this outcome
    ///
    /// An empty candidate set is reported inside a normal response and
    /// does not fail the process.
    pub fn exit_code(&self) -> i32 {
        match self {
            MatchError::EmptyCandidateSet => 0,
            MatchError::InvalidInput(_) | MatchError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let invalid = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(MatchError::from(invalid).exit_code(), 1);
        assert_eq!(MatchError::EmptyCandidateSet.exit_code(), 0);
    }
}

use std::io::{Read, Write};

use crate::core::Matcher;
use crate::error::MatchError;
use crate::models::{ErrorResponse, MatchRequest, MatchResponse};
use crate::output::write_json;

/// Parse a raw payload and rank its internships
///
/// Missing user keys are filled from the default profile before scoring.
/// An empty or absent internship list short-circuits with
/// [`MatchError::EmptyCandidateSet`].
pub fn find_matches(raw: &[u8], matcher: &Matcher) -> Result<MatchResponse, MatchError> {
    let request: MatchRequest = serde_json::from_slice(raw)?;

    if request.internships.is_empty() {
        return Err(MatchError::EmptyCandidateSet);
    }

    let user = request.user.with_defaults();
    let result = matcher.find_matches(&user, request.internships);

    tracing::info!(
        total_candidates = result.total_candidates,
        matched = result.matches.len(),
        "matching complete"
    );

    Ok(MatchResponse::found(result.matches))
}

/// Run one read-compute-write cycle
///
/// Reads the whole payload from `input`, writes exactly one JSON document
/// to `output` and returns the process exit code. Only a failure to write
/// the response is returned as an error.
pub fn run<R, W>(mut input: R, mut output: W, matcher: &Matcher) -> Result<i32, MatchError>
where
    R: Read,
    W: Write,
{
    let mut raw = Vec::new();
    let outcome = match input.read_to_end(&mut raw) {
        Ok(_) => find_matches(&raw, matcher),
        Err(e) => Err(MatchError::Io(e)),
    };

    let exit_code = match outcome {
        Ok(response) => {
            write_json(&mut output, &response)?;
            0
        }
        Err(MatchError::EmptyCandidateSet) => {
            tracing::info!("no internships supplied");
            write_json(&mut output, &MatchResponse::no_internships())?;
            MatchError::EmptyCandidateSet.exit_code()
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejecting input");
            write_json(&mut output, &ErrorResponse::invalid_input())?;
            e.exit_code()
        }
    };

    output.flush()?;
    Ok(exit_code)
}

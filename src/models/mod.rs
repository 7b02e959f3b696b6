// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, Internship, ScoredInternship, Score, coerce_stipend, text_of};
pub use requests::MatchRequest;
pub use responses::{MatchResponse, ErrorResponse};

// Core algorithm exports
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use matcher::{Matcher, MatchResult, MIN_MATCH_SCORE, MAX_MATCHES};
pub use scoring::{calculate_match_score, Contribution};
pub use skills::{normalize_skills, count_overlap};

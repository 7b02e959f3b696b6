use crate::models::{Internship, ScoredInternship, UserProfile};
use crate::core::scoring::calculate_match_score;

/// Lowest score a posting needs to be reported
pub const MIN_MATCH_SCORE: f64 = 60.0;

/// Maximum number of matches reported
pub const MAX_MATCHES: usize = 5;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredInternship>,
    pub total_candidates: usize,
}

/// Ranks internship postings against a user profile
///
/// # Pipeline Stages
/// 1. Score every posting
/// 2. Stable sort by score, highest first
/// 3. Drop postings under the minimum score
/// 4. Keep the top results
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: f64,
    limit: usize,
}

impl Matcher {
    pub fn new(min_score: f64, limit: usize) -> Self {
        Self { min_score, limit }
    }

    /// Find the best internships for a user
    ///
    /// # Arguments
    /// * `user` - The user's profile, with defaults already applied
    /// * `internships` - All candidate postings, in input order
    ///
    /// # Returns
    /// MatchResult containing the ranked matches. Postings with equal
    /// scores keep their input order.
    pub fn find_matches(&self, user: &UserProfile, internships: Vec<Internship>) -> MatchResult {
        let total_candidates = internships.len();

        let mut scored: Vec<ScoredInternship> = internships
            .into_iter()
            .map(|internship| {
                let (score, reasons) = calculate_match_score(user, &internship);
                tracing::debug!(title = ?internship.title, score = score.value, "scored internship");
                ScoredInternship::new(internship, score, reasons)
            })
            .collect();

        // sort_by is stable, ties stay in input order
        scored.sort_by(|a, b| {
            b.score
                .value
                .partial_cmp(&a.score.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let matches: Vec<ScoredInternship> = scored
            .into_iter()
            .filter(|m| m.score.value >= self.min_score)
            .take(self.limit)
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(MIN_MATCH_SCORE, MAX_MATCHES)
    }
}

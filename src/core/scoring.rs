use crate::core::skills::{count_overlap, normalize_skills};
use crate::models::{Internship, Score, UserProfile};

pub const SKILL_WEIGHT: f64 = 60.0;
pub const FIELD_BONUS: f64 = 15.0;
pub const LOCATION_BONUS: f64 = 10.0;
pub const STIPEND_CLOSE_BONUS: f64 = 10.0;
pub const STIPEND_ABOVE_BONUS: f64 = 5.0;
pub const STIPEND_BELOW_PENALTY: f64 = -5.0;
pub const TYPE_BONUS: f64 = 5.0;

/// Relative stipend gap under which an offer counts as close
pub const STIPEND_TOLERANCE: f64 = 0.3;

/// Points a single rule adds to (or removes from) the score
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub points: f64,
    pub reason: String,
}

impl Contribution {
    fn new(points: f64, reason: impl Into<String>) -> Self {
        Self {
            points,
            reason: reason.into(),
        }
    }
}

/// Calculate a match score (0-100) for an internship against a user profile
///
/// Scoring formula:
/// score = (
///     skill_overlap * 60 +   # share of required skills the user has
///     field_match   * 15 +   # preferred role appears in the field
///     location      * 10 +   # preferred location appears in the location
///     stipend       (+10 / +5 / -5) +
///     type_match    * 5      # preferred type appears in the type
/// )
///
/// The sum is rounded to two decimals and clamped to [0, 100]. Reasons are
/// returned in rule order, one per rule that fired.
pub fn calculate_match_score(user: &UserProfile, internship: &Internship) -> (Score, Vec<String>) {
    let user_skills = normalize_skills(user.skills());
    let required_skills = normalize_skills(&internship.skills_text());

    // Only the skill rule contributes fractional points
    let skill = skill_overlap_score(&user_skills, &required_skills);
    let fractional = skill.is_some();

    let contributions = [
        skill,
        field_match_score(user.preferred_role(), &internship.field_text()),
        location_match_score(user.preferred_location(), &internship.location_text()),
        stipend_alignment_score(user.expected_stipend(), internship.stipend_amount()),
        type_match_score(user.internship_type(), &internship.type_text()),
    ];

    let mut total = 0.0;
    let mut reasons = Vec::new();
    for contribution in contributions.into_iter().flatten() {
        total += contribution.points;
        reasons.push(contribution.reason);
    }

    let value = round_to_cents(total).clamp(0.0, 100.0);
    let score = if fractional {
        Score::with_fraction(value)
    } else {
        Score::whole(value)
    };

    (score, reasons)
}

/// Share of the posting's skills covered by the user, weighted to 60
#[inline]
pub fn skill_overlap_score(user_skills: &[String], required_skills: &[String]) -> Option<Contribution> {
    if user_skills.is_empty() || required_skills.is_empty() {
        return None;
    }

    let overlap = count_overlap(user_skills, required_skills);
    let points = overlap as f64 / required_skills.len() as f64 * SKILL_WEIGHT;

    Some(Contribution::new(
        points,
        format!(
            "Skill overlap ({}/{}) → +{:.1}",
            overlap,
            required_skills.len(),
            points
        ),
    ))
}

/// An empty preferred role is contained in every field and always matches
#[inline]
pub fn field_match_score(preferred_role: &str, field: &str) -> Option<Contribution> {
    contains_ignoring_case(field, preferred_role)
        .then(|| Contribution::new(FIELD_BONUS, "Field matches user preference (+15)"))
}

#[inline]
pub fn location_match_score(preferred_location: &str, location: &str) -> Option<Contribution> {
    (!preferred_location.is_empty() && contains_ignoring_case(location, preferred_location))
        .then(|| Contribution::new(LOCATION_BONUS, "Preferred location match (+10)"))
}

/// Compare the expected and offered stipends
///
/// Skipped unless both sides parsed to non-zero integers. Exactly one of
/// the three outcomes fires otherwise.
#[inline]
pub fn stipend_alignment_score(expected: Option<i64>, offered: Option<i64>) -> Option<Contribution> {
    let (expected, offered) = (expected?, offered?);

    let gap = (expected as f64 - offered as f64).abs();
    let diff = gap / expected.max(offered) as f64;

    let contribution = if diff < STIPEND_TOLERANCE {
        Contribution::new(STIPEND_CLOSE_BONUS, "Stipend close to expectation (+10)")
    } else if expected < offered {
        Contribution::new(STIPEND_ABOVE_BONUS, "Offered stipend exceeds expectation (+5)")
    } else {
        Contribution::new(STIPEND_BELOW_PENALTY, "Expected stipend higher than offer (-5)")
    };

    Some(contribution)
}

#[inline]
pub fn type_match_score(preferred_type: &str, internship_type: &str) -> Option<Contribution> {
    contains_ignoring_case(internship_type, preferred_type)
        .then(|| Contribution::new(TYPE_BONUS, "Preferred internship type matched (+5)"))
}

#[inline]
fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Round half-to-even on the exact binary value, like float formatting does
#[inline]
fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

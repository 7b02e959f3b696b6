use std::collections::HashSet;

/// Split a free-text skill list into lowercase tokens
///
/// Tokens are separated by any run of commas or whitespace. Order and
/// duplicates are kept; empty input yields an empty list.
#[inline]
pub fn normalize_skills(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Number of distinct tokens present in both lists
#[inline]
pub fn count_overlap(user_skills: &[String], required_skills: &[String]) -> usize {
    let user: HashSet<&str> = user_skills.iter().map(String::as_str).collect();
    let required: HashSet<&str> = required_skills.iter().map(String::as_str).collect();

    user.intersection(&required).count()
}

//! Registration input validation.
//!
//! All predicates here are pure; uniqueness checks against the persisted
//! store live on [`crate::registry::UserRegistry`].

use crate::types::{FitnessLevel, GOAL_VOCABULARY};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// local@domain.tld - local allows alphanumerics plus ._%+-, domain allows
/// alphanumerics plus .-, tld is at least two letters
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Validate an email address format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a user-typed fitness level (case-insensitive)
pub fn is_valid_fitness_level(level: &str) -> bool {
    FitnessLevel::from_str(level).is_ok()
}

/// Validate a user-typed age: all digits, in (0, 130)
pub fn is_valid_age(age: &str) -> bool {
    if age.is_empty() || !age.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(age.parse::<u32>(), Ok(n) if n > 0 && n < 130)
}

/// Validate a free-text medical field: must be non-empty after trimming
pub fn is_non_empty(field: &str) -> bool {
    !field.trim().is_empty()
}

/// Parse a comma-separated goals line against the goal vocabulary.
///
/// Keeps input order, drops entries outside the vocabulary and duplicate
/// selections. An empty result means the line had no valid goal.
pub fn parse_goals(input: &str) -> Vec<String> {
    let mut goals = Vec::new();
    for raw in input.split(',') {
        let goal = raw.trim();
        if GOAL_VOCABULARY.contains(&goal) && !goals.iter().any(|g| g == goal) {
            goals.push(goal.to_string());
        }
    }
    goals
}

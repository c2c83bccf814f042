//! Core domain types for the FitPlan system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Fitness levels and the level ordering rules
//! - Fitness plans (catalog entries)
//! - User profiles built at registration time
//! - The fixed health-goal vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Fitness Level
// ============================================================================

/// Ordinal fitness tier a user reports and a plan requires
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// All levels, in ascending order of capability
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Whether a user at this level satisfies a plan's minimum level.
    ///
    /// Advanced users satisfy every requirement; everyone else must match
    /// the plan's minimum exactly.
    pub fn satisfies(self, minimum: FitnessLevel) -> bool {
        self == FitnessLevel::Advanced || self == minimum
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FitnessLevel {
    type Err = crate::Error;

    /// Case-insensitive parse of a user-typed level
    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            other => Err(crate::Error::Other(format!(
                "unknown fitness level '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Fitness Plan
// ============================================================================

/// A catalog entry: one category of exercise with its weekly minimum,
/// level requirement and the goal it targets
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FitnessPlan {
    pub category: String,
    pub min_duration_minutes: u32,
    pub min_fitness_level: FitnessLevel,
    pub health_goal: String,
}

// ============================================================================
// Goal Vocabulary
// ============================================================================

/// The fixed set of health goals a user may select from
pub const GOAL_VOCABULARY: [&str; 5] = [
    "Weight Loss",
    "Muscle Building",
    "Improve Flexibility",
    "Stress Relief",
    "Improve Cardiovascular Health",
];

// ============================================================================
// User Profile
// ============================================================================

/// A registered user. Built once at registration, never mutated.
///
/// `password_hash` is the lowercase hex SHA-256 digest of the password;
/// the raw password is never stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub fitness_goals: Vec<String>,
    pub fitness_level: FitnessLevel,
    pub age: u8,
    pub illnesses: String,
    pub surgeries: String,
}

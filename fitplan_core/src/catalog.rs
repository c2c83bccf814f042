//! Default catalog of fitness plans.
//!
//! The catalog is an ordered sequence; matching walks it front to back, so
//! the order here is significant.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Vec<FitnessPlan>> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static [FitnessPlan] {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of five fixed plans
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Vec<FitnessPlan> {
    vec![
        FitnessPlan {
            category: "Cardio".into(),
            min_duration_minutes: 150,
            min_fitness_level: FitnessLevel::Beginner,
            health_goal: "Weight Loss".into(),
        },
        FitnessPlan {
            category: "Strength Training".into(),
            min_duration_minutes: 120,
            min_fitness_level: FitnessLevel::Intermediate,
            health_goal: "Muscle Building".into(),
        },
        FitnessPlan {
            category: "Flexibility".into(),
            min_duration_minutes: 90,
            min_fitness_level: FitnessLevel::Beginner,
            health_goal: "Improve Flexibility".into(),
        },
        FitnessPlan {
            category: "HIIT".into(),
            min_duration_minutes: 90,
            min_fitness_level: FitnessLevel::Advanced,
            health_goal: "Improve Cardiovascular Health".into(),
        },
        FitnessPlan {
            category: "Yoga".into(),
            min_duration_minutes: 120,
            min_fitness_level: FitnessLevel::Beginner,
            health_goal: "Stress Relief".into(),
        },
    ]
}

/// Validate a catalog for consistency and completeness
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate(catalog: &[FitnessPlan]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_categories = std::collections::HashSet::new();

    if catalog.is_empty() {
        errors.push("Catalog has no plans".to_string());
    }

    for plan in catalog {
        if plan.category.is_empty() {
            errors.push("Plan has empty category".to_string());
        }
        if plan.health_goal.is_empty() {
            errors.push(format!("Plan '{}' has empty health goal", plan.category));
        } else if !GOAL_VOCABULARY.contains(&plan.health_goal.as_str()) {
            errors.push(format!(
                "Plan '{}' targets goal '{}' outside the goal vocabulary",
                plan.category, plan.health_goal
            ));
        }
        if plan.min_duration_minutes == 0 {
            errors.push(format!(
                "Plan '{}' has zero minimum duration",
                plan.category
            ));
        }
        if !seen_categories.insert(plan.category.clone()) {
            errors.push(format!("Duplicate plan category '{}'", plan.category));
        }
    }

    errors
}

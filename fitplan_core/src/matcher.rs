//! Plan matching.
//!
//! A single greedy pass over the catalog: first matching plan per category
//! wins, catalog order is preserved, no backtracking and no scoring.

use crate::{FitnessPlan, UserProfile};
use std::collections::HashSet;

/// Match catalog plans against a user profile.
///
/// A plan matches when its health goal is among the user's selected goals,
/// the user's level satisfies the plan's minimum (Advanced satisfies
/// everything), and no plan of the same category has already matched.
pub fn match_plans<'a>(user: &UserProfile, catalog: &'a [FitnessPlan]) -> Vec<&'a FitnessPlan> {
    let mut matched = Vec::new();
    let mut selected_categories: HashSet<&str> = HashSet::new();

    for plan in catalog {
        if user.fitness_goals.iter().any(|g| g == &plan.health_goal)
            && user.fitness_level.satisfies(plan.min_fitness_level)
            && !selected_categories.contains(plan.category.as_str())
        {
            matched.push(plan);
            selected_categories.insert(&plan.category);
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, hash_password, FitnessLevel};

    fn create_test_user(goals: &[&str], level: FitnessLevel) -> UserProfile {
        UserProfile {
            username: "alice".into(),
            password_hash: hash_password("alice-password"),
            email: "alice@example.com".into(),
            fitness_goals: goals.iter().map(|g| g.to_string()).collect(),
            fitness_level: level,
            age: 30,
            illnesses: "None".into(),
            surgeries: "None".into(),
        }
    }

    #[test]
    fn test_beginner_matches_beginner_plans() {
        let catalog = build_default_catalog();
        let user = create_test_user(&["Weight Loss", "Stress Relief"], FitnessLevel::Beginner);

        let matched = match_plans(&user, &catalog);
        let categories: Vec<_> = matched.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["Cardio", "Yoga"]);
    }

    #[test]
    fn test_advanced_satisfies_any_minimum() {
        let catalog = build_default_catalog();
        let user = create_test_user(&["Weight Loss", "Stress Relief"], FitnessLevel::Advanced);

        let matched = match_plans(&user, &catalog);
        let categories: Vec<_> = matched.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["Cardio", "Yoga"]);
    }

    #[test]
    fn test_beginner_does_not_match_intermediate_plan() {
        let catalog = build_default_catalog();
        let user = create_test_user(&["Muscle Building"], FitnessLevel::Beginner);

        assert!(match_plans(&user, &catalog).is_empty());
    }

    #[test]
    fn test_empty_goals_match_nothing() {
        let catalog = build_default_catalog();
        let user = create_test_user(&[], FitnessLevel::Advanced);

        assert!(match_plans(&user, &catalog).is_empty());
    }

    #[test]
    fn test_one_plan_per_category() {
        // Two plans share a category; only the first in catalog order wins.
        let mut catalog = build_default_catalog();
        catalog.push(FitnessPlan {
            category: "Cardio".into(),
            min_duration_minutes: 60,
            min_fitness_level: FitnessLevel::Beginner,
            health_goal: "Stress Relief".into(),
        });

        let user = create_test_user(&["Weight Loss", "Stress Relief"], FitnessLevel::Beginner);
        let matched = match_plans(&user, &catalog);

        let cardio_count = matched
            .iter()
            .filter(|p| p.category == "Cardio")
            .count();
        assert_eq!(cardio_count, 1);
        assert_eq!(matched[0].health_goal, "Weight Loss");
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = build_default_catalog();
        let user = create_test_user(
            &[
                "Stress Relief",
                "Weight Loss",
                "Improve Flexibility",
            ],
            FitnessLevel::Beginner,
        );

        let categories: Vec<_> = match_plans(&user, &catalog)
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        // Catalog order, not goal-selection order
        assert_eq!(categories, vec!["Cardio", "Flexibility", "Yoga"]);
    }
}

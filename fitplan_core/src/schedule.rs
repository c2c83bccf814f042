//! Weekly exercise time calculation.

use crate::config::ScheduleConfig;
use crate::FitnessLevel;

/// Compute the recommended weekly exercise time in minutes.
///
/// `total = base + bonus(level) * matched_plan_count`. Beginners get the
/// largest per-plan bonus, advanced users the smallest. No upper bound.
pub fn weekly_exercise_time(
    level: FitnessLevel,
    matched_plan_count: usize,
    config: &ScheduleConfig,
) -> u32 {
    let bonus = config.level_bonus(level);
    config.base_minutes + bonus * matched_plan_count as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beginner_with_two_matches() {
        let config = ScheduleConfig::default();
        assert_eq!(
            weekly_exercise_time(FitnessLevel::Beginner, 2, &config),
            180
        );
    }

    #[test]
    fn test_advanced_with_two_matches() {
        let config = ScheduleConfig::default();
        assert_eq!(
            weekly_exercise_time(FitnessLevel::Advanced, 2, &config),
            140
        );
    }

    #[test]
    fn test_no_matches_is_base_only() {
        let config = ScheduleConfig::default();
        for level in FitnessLevel::ALL {
            assert_eq!(weekly_exercise_time(level, 0, &config), 120);
        }
    }

    #[test]
    fn test_intermediate_bonus() {
        let config = ScheduleConfig::default();
        assert_eq!(
            weekly_exercise_time(FitnessLevel::Intermediate, 3, &config),
            180
        );
    }

    #[test]
    fn test_custom_config() {
        let config = ScheduleConfig {
            base_minutes: 100,
            beginner_bonus: 50,
            intermediate_bonus: 25,
            advanced_bonus: 5,
        };
        assert_eq!(
            weekly_exercise_time(FitnessLevel::Beginner, 1, &config),
            150
        );
    }
}

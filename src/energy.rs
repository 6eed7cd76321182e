//! TDEE (Total Daily Energy Expenditure) projection and goal adjustment.
//!
//! TDEE is the rounded BMR scaled by the PAL multiplier of the selected
//! activity level. The goal delta is then applied and the result clamped to
//! a per-sex minimum intake.

use crate::domain::Sex;
use crate::formulas::round_half_up;

// === Constants ===

/// Minimum daily target for men (kcal).
pub const MALE_FLOOR_KCAL: i64 = 1500;

/// Minimum daily target for women (kcal).
pub const FEMALE_FLOOR_KCAL: i64 = 1200;

/// Returns the minimum daily target for a sex.
pub fn calorie_floor(sex: Sex) -> i64 {
    match sex {
        Sex::Male => MALE_FLOOR_KCAL,
        Sex::Female => FEMALE_FLOOR_KCAL,
    }
}

/// Calculates TDEE from an already rounded BMR.
///
/// Formula: TDEE = round(BMR × PAL), halves rounding up.
///
/// # Arguments
/// * `bmr_rounded` - BMR rounded to whole kcal
/// * `activity_multiplier` - PAL factor of the activity level
pub fn compute_tdee(bmr_rounded: i64, activity_multiplier: f64) -> i64 {
    round_half_up(bmr_rounded as f64 * activity_multiplier)
}

/// Calculates the daily target intake for a goal.
///
/// The target is `tdee + goal_delta`, raised to the sex-specific floor when
/// it falls below it. It is never raised for any other reason.
pub fn compute_target_calories(tdee: i64, goal_delta: i64, sex: Sex) -> i64 {
    let target = tdee + goal_delta;
    let floor = calorie_floor(sex);
    if target < floor {
        log::warn!(
            "Target {} kcal below {} floor, raising to {} kcal",
            target,
            sex,
            floor
        );
    }
    target.max(floor)
}

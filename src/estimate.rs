//! Estimation pipeline orchestration.
//!
//! Runs validation, BMR, TDEE, goal adjustment, macro allocation and body
//! composition in order and bundles the outputs. Every call is independent;
//! nothing is cached between calls.

use serde::Serialize;

use crate::body_composition::{bmi_category, compute_bmi, compute_ideal_weight};
use crate::domain::{
    ActivityLevel, BiometricInput, BmiCategory, FormulaChoice, Goal, Sex, ValidatedInput,
};
use crate::energy::{compute_target_calories, compute_tdee};
use crate::error::ValidationError;
use crate::formulas::{compute_bmr, round_half_up};
use crate::macronutrients::{MacroSplit, allocate_macros};
use crate::validation::validate;

/// Outputs of one estimation.
#[derive(Debug, Clone, Serialize)]
pub struct EstimationResult {
    pub sex: Sex,
    pub formula: FormulaChoice,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    /// BMR before rounding, kept for downstream precision.
    pub bmr_unrounded: f64,
    /// BMR rounded to whole kcal; TDEE is derived from this value.
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: MacroSplit,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub ideal_weight_kg: i64,
}

/// Runs the full estimation from raw input and catalog indices.
///
/// # Arguments
/// * `input` - Biometric values as entered
/// * `activity_level_index` - Activity catalog index (0–4)
/// * `goal_index` - Goal catalog index (0–2)
/// * `formula` - BMR equation
///
/// # Errors
/// Returns `ValidationError` if any biometric value is missing or out of
/// range, or if either index is outside its catalog.
pub fn compute(
    input: &BiometricInput,
    activity_level_index: usize,
    goal_index: usize,
    formula: FormulaChoice,
) -> Result<EstimationResult, ValidationError> {
    let validated = validate(input)?;
    let activity_level = ActivityLevel::from_index(activity_level_index)
        .ok_or(ValidationError::UnknownActivityLevel(activity_level_index))?;
    let goal = Goal::from_index(goal_index).ok_or(ValidationError::UnknownGoal(goal_index))?;

    Ok(estimate(&validated, activity_level, goal, formula))
}

/// Runs the estimation on already validated input.
pub fn estimate(
    input: &ValidatedInput,
    activity_level: ActivityLevel,
    goal: Goal,
    formula: FormulaChoice,
) -> EstimationResult {
    let sex = input.sex();
    let weight_kg = input.weight_kg();
    let height_cm = input.height_cm();

    let bmr_unrounded = compute_bmr(formula, sex, weight_kg, height_cm, input.age_years());
    let bmr = round_half_up(bmr_unrounded);
    log::debug!("BMR ({}): {:.2} -> {}", formula, bmr_unrounded, bmr);

    let tdee = compute_tdee(bmr, activity_level.multiplier());
    log::debug!("TDEE (PAL {}): {}", activity_level.multiplier(), tdee);

    let target_calories = compute_target_calories(tdee, goal.caloric_delta(), sex);
    log::debug!("Target ({}): {}", goal.delta_description(), target_calories);

    let macros = allocate_macros(target_calories, weight_kg, goal == Goal::MuscleGain);
    log::debug!(
        "Macros: protein {} g, fat {} g, carb {} g ({} kcal)",
        macros.protein_g,
        macros.fat_g,
        macros.carb_g,
        macros.total_kcal()
    );

    let bmi = compute_bmi(weight_kg, height_cm);
    let ideal_weight_kg = compute_ideal_weight(sex, height_cm);

    EstimationResult {
        sex,
        formula,
        activity_level,
        goal,
        bmr_unrounded,
        bmr,
        tdee,
        target_calories,
        macros,
        bmi,
        bmi_category: bmi_category(bmi),
        ideal_weight_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;
    use crate::energy::calorie_floor;

    fn male_30_175_80() -> BiometricInput {
        BiometricInput::new(Sex::Male, 30.0, 175.0, 80.0)
    }

    #[test]
    fn test_mifflin_male_bmr() {
        let result = compute(&male_30_175_80(), 0, 1, FormulaChoice::MifflinStJeor).unwrap();
        assert_eq!(result.bmr, 1749);
        assert!((result.bmr_unrounded - 1748.75).abs() < 1e-9);
    }

    #[test]
    fn test_moderate_activity_tdee() {
        let result = compute(&male_30_175_80(), 2, 1, FormulaChoice::MifflinStJeor).unwrap();
        assert_eq!(result.tdee, 2711);
        assert_eq!(result.target_calories, 2711);
    }

    #[test]
    fn test_weight_loss_full_pipeline() {
        let result = compute(&male_30_175_80(), 2, 0, FormulaChoice::MifflinStJeor).unwrap();
        assert_eq!(result.goal, Goal::WeightLoss);
        assert_eq!(result.target_calories, 2211);
        assert_eq!(result.macros.protein_g, 136);
        assert_eq!(result.macros.fat_g, 61);
        assert_eq!(result.macros.carb_g, 279);
        assert_eq!(result.macros.total_kcal(), result.target_calories);
    }

    #[test]
    fn test_harris_benedict_female_bmr() {
        let input = BiometricInput::new(Sex::Female, 25.0, 165.0, 60.0);
        let result = compute(&input, 1, 1, FormulaChoice::HarrisBenedict).unwrap();
        assert_eq!(result.bmr, 1405);
    }

    #[test]
    fn test_body_composition_outputs() {
        let input = BiometricInput::new(Sex::Male, 40.0, 175.0, 75.0);
        let result = compute(&input, 0, 1, FormulaChoice::MifflinStJeor).unwrap();
        assert!((result.bmi - 24.5).abs() < 1e-9);
        assert_eq!(result.bmi_category, BmiCategory::Normal);
        assert_eq!(result.ideal_weight_kg, 70);
    }

    #[test]
    fn test_invalid_input_does_not_compute() {
        let input = BiometricInput::new(Sex::Male, 9.99, 175.0, 80.0);
        let err = compute(&input, 2, 0, FormulaChoice::MifflinStJeor).unwrap_err();
        assert_eq!(err.field(), Some(Field::Age));
    }

    #[test]
    fn test_unknown_catalog_indices() {
        let input = male_30_175_80();
        assert_eq!(
            compute(&input, 5, 0, FormulaChoice::MifflinStJeor).unwrap_err(),
            ValidationError::UnknownActivityLevel(5)
        );
        assert_eq!(
            compute(&input, 0, 3, FormulaChoice::MifflinStJeor).unwrap_err(),
            ValidationError::UnknownGoal(3)
        );
    }

    #[test]
    fn test_floor_and_macro_sum_across_all_selections() {
        let inputs = [
            BiometricInput::new(Sex::Female, 110.0, 100.0, 30.0),
            BiometricInput::new(Sex::Male, 110.0, 100.0, 30.0),
            BiometricInput::new(Sex::Female, 10.0, 250.0, 300.0),
            BiometricInput::new(Sex::Male, 45.0, 182.0, 95.5),
        ];

        for input in &inputs {
            for formula in FormulaChoice::all() {
                for level in 0..ActivityLevel::all().len() {
                    for goal in 0..Goal::all().len() {
                        let result = compute(input, level, goal, *formula).unwrap();
                        assert!(result.target_calories >= calorie_floor(input.sex));
                        assert_eq!(result.macros.total_kcal(), result.target_calories);
                    }
                }
            }
        }
    }

    #[test]
    fn test_floor_raises_small_female_target() {
        // Mifflin: 300 + 625 − 550 − 161 = 214 kcal BMR
        let input = BiometricInput::new(Sex::Female, 110.0, 100.0, 30.0);
        let result = compute(&input, 0, 0, FormulaChoice::MifflinStJeor).unwrap();
        assert_eq!(result.bmr, 214);
        assert_eq!(result.target_calories, 1200);
        assert_eq!(result.macros.total_kcal(), 1200);
    }

    #[test]
    fn test_negative_carbs_preserved_for_valid_input() {
        // Mifflin BMR 1414, TDEE 1697, 1197 floored to 1200; protein 255 g = 1020 kcal
        let input = BiometricInput::new(Sex::Female, 110.0, 100.0, 150.0);
        let result = compute(&input, 0, 0, FormulaChoice::MifflinStJeor).unwrap();
        assert_eq!(result.bmr, 1414);
        assert_eq!(result.tdee, 1697);
        assert_eq!(result.target_calories, 1200);
        assert_eq!(result.macros.carb_kcal, -120);
        assert_eq!(result.macros.carb_g, -30);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = male_30_175_80();
        let a = compute(&input, 3, 2, FormulaChoice::HarrisBenedict).unwrap();
        let b = compute(&input, 3, 2, FormulaChoice::HarrisBenedict).unwrap();
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.target_calories, b.target_calories);
        assert_eq!(a.macros, b.macros);
    }
}

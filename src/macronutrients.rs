//! Macronutrient allocation of a daily calorie target.
//!
//! Protein is sized from body weight, fat takes a fixed share of the target,
//! and carbohydrate receives whatever energy remains. Because carbohydrate
//! is the remainder, the three kcal shares always sum to the target.

use serde::Serialize;

use crate::formulas::round_half_up;

// === Constants ===

/// Protein per kg body weight for muscle gain (g/kg).
pub const PROTEIN_G_PER_KG_MUSCLE_GAIN: f64 = 2.0;

/// Protein per kg body weight for every other goal (g/kg).
pub const PROTEIN_G_PER_KG_DEFAULT: f64 = 1.7;

/// Share of the target calories allotted to fat.
pub const FAT_SHARE: f64 = 0.25;

/// Energy density of protein (kcal/g).
pub const KCAL_PER_G_PROTEIN: i64 = 4;

/// Energy density of carbohydrate (kcal/g).
pub const KCAL_PER_G_CARB: i64 = 4;

/// Energy density of fat (kcal/g).
pub const KCAL_PER_G_FAT: i64 = 9;

/// Daily macronutrient split in grams and kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroSplit {
    pub protein_g: i64,
    pub fat_g: i64,
    /// Not clamped; negative when protein and fat exceed the target.
    pub carb_g: i64,
    pub protein_kcal: i64,
    pub fat_kcal: i64,
    pub carb_kcal: i64,
}

impl MacroSplit {
    /// Sum of the three kcal shares, equal to the target they came from.
    pub fn total_kcal(&self) -> i64 {
        self.protein_kcal + self.fat_kcal + self.carb_kcal
    }
}

/// Splits target calories into protein, fat and carbohydrate.
///
/// ```text
/// protein_g  = round(g_per_kg × weight)      g_per_kg = 2.0 (muscle gain) | 1.7
/// fat_kcal   = round(target × 0.25)          fat_g = round(fat_kcal / 9)
/// carb_kcal  = target − protein_g × 4 − fat_kcal
/// carb_g     = round(carb_kcal / 4)
/// ```
///
/// # Arguments
/// * `target_calories` - Daily target intake in kcal
/// * `weight_kg` - Body weight in kilograms
/// * `goal_is_muscle_gain` - Selects the higher protein factor
pub fn allocate_macros(
    target_calories: i64,
    weight_kg: f64,
    goal_is_muscle_gain: bool,
) -> MacroSplit {
    let protein_per_kg = if goal_is_muscle_gain {
        PROTEIN_G_PER_KG_MUSCLE_GAIN
    } else {
        PROTEIN_G_PER_KG_DEFAULT
    };
    let protein_g = round_half_up(protein_per_kg * weight_kg);
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let fat_kcal = round_half_up(target_calories as f64 * FAT_SHARE);
    let fat_g = round_half_up(fat_kcal as f64 / KCAL_PER_G_FAT as f64);

    let carb_kcal = target_calories - protein_kcal - fat_kcal;
    let carb_g = round_half_up(carb_kcal as f64 / KCAL_PER_G_CARB as f64);

    if carb_kcal < 0 {
        log::warn!(
            "Protein and fat exceed the {} kcal target; carbohydrate remainder is {} kcal",
            target_calories,
            carb_kcal
        );
    }

    MacroSplit {
        protein_g,
        fat_g,
        carb_g,
        protein_kcal,
        fat_kcal,
        carb_kcal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_loss_split() {
        // 2211 kcal target, 80 kg
        let split = allocate_macros(2211, 80.0, false);
        assert_eq!(split.protein_g, 136);
        assert_eq!(split.protein_kcal, 544);
        assert_eq!(split.fat_kcal, 553);
        assert_eq!(split.fat_g, 61);
        assert_eq!(split.carb_kcal, 1114);
        assert_eq!(split.carb_g, 279);
    }

    #[test]
    fn test_muscle_gain_uses_higher_protein() {
        let split = allocate_macros(3000, 80.0, true);
        assert_eq!(split.protein_g, 160);
        assert_eq!(split.protein_kcal, 640);
        assert_eq!(split.fat_kcal, 750);
        assert_eq!(split.carb_kcal, 1610);
    }

    #[test]
    fn test_kcal_shares_sum_to_target() {
        for target in [1200, 1500, 1999, 2211, 2711, 3011, 4567] {
            for weight in [30.0, 55.5, 80.0, 123.4, 300.0] {
                for gain in [false, true] {
                    let split = allocate_macros(target, weight, gain);
                    assert_eq!(split.total_kcal(), target, "{} {} {}", target, weight, gain);
                }
            }
        }
    }

    #[test]
    fn test_carbs_not_clamped() {
        // 300 kg at 1.7 g/kg = 510 g protein = 2040 kcal, above the whole target
        let split = allocate_macros(1200, 300.0, false);
        assert_eq!(split.protein_kcal, 2040);
        assert_eq!(split.fat_kcal, 300);
        assert_eq!(split.carb_kcal, -1140);
        assert_eq!(split.carb_g, -285);
        assert_eq!(split.total_kcal(), 1200);
    }

    #[test]
    fn test_fat_grams_round_from_rounded_kcal() {
        // 1234 × 0.25 = 308.5 -> 309 kcal -> 34.33 g -> 34 g
        let split = allocate_macros(1234, 60.0, false);
        assert_eq!(split.fat_kcal, 309);
        assert_eq!(split.fat_g, 34);
    }
}

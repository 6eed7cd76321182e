//! Plain-text rendering of estimates and reference tables.

use std::fmt;

use crate::catalog::{FoodItem, Tip};
use crate::domain::{ActivityLevel, FormulaChoice, Goal};
use crate::estimate::EstimationResult;
use crate::macronutrients::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Formats an integer with a space every three digits, e.g. `2 711`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Multi-line text report of one estimation.
///
/// Macro kcal figures are shown as grams × energy density, the way the
/// calculator page displays them.
pub struct EstimateReport<'a>(pub &'a EstimationResult);

impl fmt::Display for EstimateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let m = &result.macros;

        writeln!(f, "=== Daily Calorie Needs ===")?;
        writeln!(f)?;
        writeln!(
            f,
            "{} · {}",
            result.goal.display_name(),
            result.activity_level.display_name()
        )?;
        writeln!(f)?;
        writeln!(f, "{:22} {:>7} kcal/day", "BMR", group_thousands(result.bmr))?;
        writeln!(
            f,
            "{:22} {:>7} kcal/day",
            format!("TDEE (PAL {})", result.activity_level.multiplier()),
            group_thousands(result.tdee)
        )?;
        writeln!(
            f,
            "{:22} {:>7} kcal/day  ({})",
            "Target",
            group_thousands(result.target_calories),
            result.goal.delta_description()
        )?;
        writeln!(f)?;
        writeln!(f, "=== Recommended Macronutrients ===")?;
        writeln!(f)?;
        for (name, grams, density) in [
            ("Protein", m.protein_g, KCAL_PER_G_PROTEIN),
            ("Fat", m.fat_g, KCAL_PER_G_FAT),
            ("Carbohydrate", m.carb_g, KCAL_PER_G_CARB),
        ] {
            writeln!(
                f,
                "{:22} {:>5} g  {:>7} kcal",
                name,
                grams,
                group_thousands(grams * density)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:22} {:>7.1}  {}", "BMI", result.bmi, result.bmi_category)?;
        writeln!(
            f,
            "{:22} {:>7} kg  (Devine formula)",
            "Ideal weight", result.ideal_weight_kg
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Based on the {} formula. Values are estimates; individual needs may differ by ±10%.",
            result.formula
        )
    }
}

/// Food table, one row per item under a header row.
pub struct FoodTable<'a>(pub &'a [&'a FoodItem]);

impl fmt::Display for FoodTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:24} {:>12} {:>8} {:>11} {:>10} {:>7}",
            "Food", "Serving", "kcal", "Protein g", "Carb g", "Fat g"
        )?;
        for food in self.0 {
            writeln!(
                f,
                "{:24} {:>12} {:>8} {:>11} {:>10} {:>7}",
                food.name, food.serving, food.kcal, food.protein_g, food.carb_g, food.fat_g
            )?;
        }
        Ok(())
    }
}

/// Numbered tip list.
pub struct TipList<'a>(pub &'a [Tip]);

impl fmt::Display for TipList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tip) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, tip.title)?;
            writeln!(f, "   {}", tip.text)?;
        }
        Ok(())
    }
}

/// The selectable activity levels, goals and formulas with their indices.
pub struct CatalogListing;

impl fmt::Display for CatalogListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity levels:")?;
        for level in ActivityLevel::all() {
            writeln!(
                f,
                "  {}  {:18} PAL {:<6} {}",
                level.index(),
                level.display_name(),
                level.multiplier(),
                level.description()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Goals:")?;
        for goal in Goal::all() {
            writeln!(
                f,
                "  {}  {:30} {:+} kcal",
                goal.index(),
                goal.display_name(),
                goal.caloric_delta()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Formulas:")?;
        for formula in FormulaChoice::all() {
            writeln!(f, "  {}", formula)?;
        }
        Ok(())
    }
}

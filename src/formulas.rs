//! Basal metabolic rate formulas and shared rounding.

use crate::domain::{FormulaChoice, Sex};

/// Mifflin-St. Jeor coefficients (1990).
mod mifflin {
    pub const WEIGHT: f64 = 10.0;
    pub const HEIGHT: f64 = 6.25;
    pub const AGE: f64 = 5.0;
    pub const MALE_OFFSET: f64 = 5.0;
    pub const FEMALE_OFFSET: f64 = -161.0;
}

/// Revised Harris-Benedict coefficients (Roza & Shizgal, 1984).
struct HarrisBenedictCoefficients {
    base: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const HARRIS_BENEDICT_MALE: HarrisBenedictCoefficients = HarrisBenedictCoefficients {
    base: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

const HARRIS_BENEDICT_FEMALE: HarrisBenedictCoefficients = HarrisBenedictCoefficients {
    base: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

/// Rounds to the nearest integer, with halves going towards positive infinity.
///
/// Matches the rounding every displayed value uses, including negative
/// remainders: `-2.5` rounds to `-2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds to one decimal place, halves going up.
///
/// Decides on the exact binary value, not on `value × 10` after it has
/// been rounded to a double: 18.449999… (73.8 / 2²) stays 18.4 even though
/// the product lands on 184.5.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    // scaled + residual is the exact product
    let residual = value.mul_add(10.0, -scaled);
    let whole = scaled.floor();
    let from_half = (scaled - whole) - 0.5;

    let tenths = if from_half >= -residual { whole + 1.0 } else { whole };
    tenths / 10.0
}

/// Calculates BMR with the Mifflin-St. Jeor equation.
///
/// Formula:
/// ```text
/// male:   10 × weight + 6.25 × height − 5 × age + 5
/// female: 10 × weight + 6.25 × height − 5 × age − 161
/// ```
pub fn mifflin_st_jeor(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let offset = match sex {
        Sex::Male => mifflin::MALE_OFFSET,
        Sex::Female => mifflin::FEMALE_OFFSET,
    };

    mifflin::WEIGHT * weight_kg + mifflin::HEIGHT * height_cm - mifflin::AGE * age_years + offset
}

/// Calculates BMR with the revised Harris-Benedict equation.
///
/// Formula:
/// ```text
/// male:   88.362 + 13.397 × weight + 4.799 × height − 5.677 × age
/// female: 447.593 + 9.247 × weight + 3.098 × height − 4.330 × age
/// ```
pub fn harris_benedict(sex: Sex, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let c = match sex {
        Sex::Male => &HARRIS_BENEDICT_MALE,
        Sex::Female => &HARRIS_BENEDICT_FEMALE,
    };

    c.base + c.weight * weight_kg + c.height * height_cm - c.age * age_years
}

/// Calculates unrounded BMR in kcal/day with the chosen formula.
///
/// # Arguments
/// * `formula` - Which equation to use
/// * `sex` - Selects the sex-specific branch
/// * `weight_kg` - Body weight in kilograms
/// * `height_cm` - Height in centimeters
/// * `age_years` - Age in years
pub fn compute_bmr(
    formula: FormulaChoice,
    sex: Sex,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
) -> f64 {
    match formula {
        FormulaChoice::MifflinStJeor => mifflin_st_jeor(sex, weight_kg, height_cm, age_years),
        FormulaChoice::HarrisBenedict => harris_benedict(sex, weight_kg, height_cm, age_years),
    }
}

//! Body composition estimates from height and weight.
//!
//! Computes Body Mass Index (BMI) with its classification band, and ideal
//! body weight with the Devine formula.

use crate::domain::{BmiCategory, Sex};
use crate::formulas::{round_half_up, round_to_tenth};

/// Upper bounds (exclusive) of the BMI bands below obesity class II.
const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
const BMI_NORMAL_BELOW: f64 = 25.0;
const BMI_OVERWEIGHT_BELOW: f64 = 30.0;
const BMI_OBESITY_I_BELOW: f64 = 35.0;

/// Devine formula constants.
mod devine {
    pub const MALE_BASE_KG: f64 = 50.0;
    pub const FEMALE_BASE_KG: f64 = 45.5;
    pub const KG_PER_INCH: f64 = 2.3;
    /// Five feet, in centimeters.
    pub const BASE_HEIGHT_CM: f64 = 152.4;
    pub const CM_PER_INCH: f64 = 2.54;
}

/// Calculates BMI rounded to one decimal place.
///
/// Formula:
/// ```text
/// BMI = weight / (height / 100)²
/// ```
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

/// Classifies a BMI value. Lower bounds are inclusive.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else if bmi < BMI_OBESITY_I_BELOW {
        BmiCategory::ObesityClassI
    } else {
        BmiCategory::ObesityClassIIPlus
    }
}

/// Calculates ideal body weight with the Devine formula, rounded to whole kg.
///
/// Formula:
/// ```text
/// male:   50   + 2.3 × (height − 152.4) / 2.54
/// female: 45.5 + 2.3 × (height − 152.4) / 2.54
/// ```
pub fn compute_ideal_weight(sex: Sex, height_cm: f64) -> i64 {
    let base = match sex {
        Sex::Male => devine::MALE_BASE_KG,
        Sex::Female => devine::FEMALE_BASE_KG,
    };
    let inches_over_five_feet = (height_cm - devine::BASE_HEIGHT_CM) / devine::CM_PER_INCH;

    round_half_up(base + devine::KG_PER_INCH * inches_over_five_feet)
}

//! Domain types for biometric input and the static selector catalogs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Biological sex, selecting the sex-specific formula branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns the display name for the sex.
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl FromStr for Sex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "ferfi" | "férfi" => Ok(Sex::Male),
            "female" | "f" | "nő" => Ok(Sex::Female),
            _ => Err(ParseError::UnknownSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// BMR equation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaChoice {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
}

impl FormulaChoice {
    /// Returns all formula variants.
    pub fn all() -> &'static [FormulaChoice] {
        &[FormulaChoice::MifflinStJeor, FormulaChoice::HarrisBenedict]
    }

    /// Returns the display name for the formula.
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaChoice::MifflinStJeor => "Mifflin-St. Jeor",
            FormulaChoice::HarrisBenedict => "Harris-Benedict",
        }
    }
}

impl FromStr for FormulaChoice {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mifflin" | "mifflin-st-jeor" | "mifflin-st. jeor" | "msj" => {
                Ok(FormulaChoice::MifflinStJeor)
            }
            "harris" | "harris-benedict" | "hb" => Ok(FormulaChoice::HarrisBenedict),
            _ => Err(ParseError::UnknownFormula(s.to_string())),
        }
    }
}

impl fmt::Display for FormulaChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Physical activity level (PAL) catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// Returns all activity levels in catalog order.
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ]
    }

    /// Looks up an activity level by catalog index (0–4).
    pub fn from_index(index: usize) -> Option<ActivityLevel> {
        Self::all().get(index).copied()
    }

    /// Position of this level in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// PAL multiplier applied to the BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Short display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly active",
            ActivityLevel::ModeratelyActive => "Moderately active",
            ActivityLevel::VeryActive => "Very active",
            ActivityLevel::ExtraActive => "Extremely active",
        }
    }

    /// Longer description of what the level means.
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "office work, little movement",
            ActivityLevel::LightlyActive => "sport 1–2x a week",
            ActivityLevel::ModeratelyActive => "sport 3–5x a week",
            ActivityLevel::VeryActive => "intense training 6–7x a week",
            ActivityLevel::ExtraActive => "physical work plus daily training",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| ParseError::UnknownActivityLevel(s.to_string()));
        }
        match key.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly-active" | "lightly active" => Ok(ActivityLevel::LightlyActive),
            "moderate" | "moderately-active" | "moderately active" => {
                Ok(ActivityLevel::ModeratelyActive)
            }
            "very" | "very-active" | "very active" => Ok(ActivityLevel::VeryActive),
            "extra" | "extra-active" | "extremely active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(ParseError::UnknownActivityLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Caloric goal catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Returns all goals in catalog order.
    pub fn all() -> &'static [Goal] {
        &[Goal::WeightLoss, Goal::Maintenance, Goal::MuscleGain]
    }

    /// Looks up a goal by catalog index (0–2).
    pub fn from_index(index: usize) -> Option<Goal> {
        Self::all().get(index).copied()
    }

    /// Position of this goal in the catalog.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Signed daily kcal adjustment applied to the TDEE.
    pub fn caloric_delta(&self) -> i64 {
        match self {
            Goal::WeightLoss => -500,
            Goal::Maintenance => 0,
            Goal::MuscleGain => 300,
        }
    }

    /// Returns the display name for the goal.
    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss (−500 kcal/day)",
            Goal::Maintenance => "Weight maintenance",
            Goal::MuscleGain => "Muscle gain (+300 kcal/day)",
        }
    }

    /// Describes the delta, e.g. "500 kcal deficit".
    pub fn delta_description(&self) -> String {
        let delta = self.caloric_delta();
        match delta.signum() {
            -1 => format!("{} kcal deficit", delta.abs()),
            1 => format!("+{} kcal surplus", delta),
            _ => "maintenance calories".to_string(),
        }
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| ParseError::UnknownGoal(s.to_string()));
        }
        match key.as_str() {
            "loss" | "lose" | "weight-loss" | "weight loss" | "fogyas" | "fogyás" => {
                Ok(Goal::WeightLoss)
            }
            "maintain" | "maintenance" => Ok(Goal::Maintenance),
            "gain" | "muscle-gain" | "muscle gain" => Ok(Goal::MuscleGain),
            _ => Err(ParseError::UnknownGoal(s.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Numeric biometric fields subject to range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Height,
    Weight,
}

impl Field {
    /// Inclusive valid range for the field.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Field::Age => (10.0, 110.0),
            Field::Height => (100.0, 250.0),
            Field::Weight => (30.0, 300.0),
        }
    }

    /// Unit the field is entered in.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::Age => "years",
            Field::Height => "cm",
            Field::Weight => "kg",
        }
    }

    /// Range rendered for messages, e.g. "100–250 cm".
    pub fn range_text(&self) -> String {
        let (min, max) = self.range();
        format!("{}–{} {}", min, max, self.unit())
    }

    /// Returns the display name for the field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Height => "Height",
            Field::Weight => "Weight",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Biometric values as entered, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiometricInput {
    pub sex: Sex,
    pub age_years: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BiometricInput {
    /// Creates a new biometric input.
    pub fn new(sex: Sex, age_years: f64, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            sex,
            age_years,
            height_cm,
            weight_kg,
        }
    }
}

/// Biometric values that passed range validation. Only `validation` builds these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub(crate) sex: Sex,
    pub(crate) age_years: f64,
    pub(crate) height_cm: f64,
    pub(crate) weight_kg: f64,
}

impl ValidatedInput {
    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn age_years(&self) -> f64 {
        self.age_years
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityClassI,
    ObesityClassIIPlus,
}

impl BmiCategory {
    /// Returns the display label for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityClassI => "Obesity (class I)",
            BmiCategory::ObesityClassIIPlus => "Severe obesity (class II+)",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

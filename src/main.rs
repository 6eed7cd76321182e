mod body_composition;
mod catalog;
mod domain;
mod energy;
mod error;
mod estimate;
mod formulas;
mod macronutrients;
mod report;
mod validation;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{FOODS, FoodItem, TIPS, find_foods};
use crate::domain::{ActivityLevel, FormulaChoice, Goal, Sex};
use crate::estimate::compute;
use crate::report::{CatalogListing, EstimateReport, FoodTable, TipList};
use crate::validation::parse_input;

/// Daily calorie, BMR, macronutrient and BMI estimator.
#[derive(Parser, Debug)]
#[command(name = "kaloria")]
#[command(about = "Estimate daily calorie needs, BMR, macros and BMI")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate BMR, TDEE, target calories, macros, BMI and ideal weight.
    Estimate(EstimateArgs),

    /// Print the food calorie table.
    Foods {
        /// Only show foods whose name contains this text.
        #[arg(long)]
        search: Option<String>,

        /// Output format.
        /// Can also be set via KALORIA_FORMAT environment variable.
        #[arg(long, value_enum, env = "KALORIA_FORMAT", default_value = "text")]
        format: OutputFormat,
    },

    /// Print practical diet tips.
    Tips,

    /// List activity levels, goals and formulas with their indices.
    Catalog,
}

#[derive(clap::Args, Debug)]
struct EstimateArgs {
    /// Sex: male or female (also m/f, férfi/nő).
    #[arg(long, default_value = "male")]
    sex: Sex,

    /// Age in years (10–110).
    #[arg(long)]
    age: Option<String>,

    /// Height in centimeters (100–250).
    #[arg(long)]
    height: Option<String>,

    /// Body weight in kilograms (30–300).
    #[arg(long)]
    weight: Option<String>,

    /// Activity level, by index (0–4) or name.
    #[arg(long, default_value = "1")]
    activity: ActivityLevel,

    /// Goal, by index (0–2) or name.
    #[arg(long, default_value = "0")]
    goal: Goal,

    /// BMR formula: mifflin or harris.
    /// Can also be set via KALORIA_FORMULA environment variable.
    #[arg(long, env = "KALORIA_FORMULA", default_value = "mifflin")]
    formula: FormulaChoice,

    /// Output format.
    /// Can also be set via KALORIA_FORMAT environment variable.
    #[arg(long, value_enum, env = "KALORIA_FORMAT", default_value = "text")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Estimate(estimate_args) => run_estimate(estimate_args),
        Command::Foods { search, format } => run_foods(search.as_deref(), format),
        Command::Tips => {
            print!("{}", TipList(TIPS));
            Ok(())
        }
        Command::Catalog => {
            print!("{}", CatalogListing);
            Ok(())
        }
    }
}

/// Validates the form values and prints the estimate.
fn run_estimate(args: EstimateArgs) -> Result<()> {
    let input = parse_input(
        args.sex,
        args.age.as_deref(),
        args.height.as_deref(),
        args.weight.as_deref(),
    );

    let result = input.and_then(|input| {
        compute(&input, args.activity.index(), args.goal.index(), args.formula)
    });

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Rejected input ({:?}): {}", e.field(), e);
            bail!("{}", e.user_message());
        }
    };

    match args.format {
        OutputFormat::Text => print!("{}", EstimateReport(&result)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize estimate")?
        ),
    }

    Ok(())
}

/// Prints the food table, optionally filtered by name.
fn run_foods(search: Option<&str>, format: OutputFormat) -> Result<()> {
    let foods: Vec<&FoodItem> = match search {
        Some(query) => find_foods(query),
        None => FOODS.iter().collect(),
    };

    if foods.is_empty() {
        log::info!("No foods match {:?}", search);
    }

    match format {
        OutputFormat::Text => print!("{}", FoodTable(&foods)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&foods).context("Failed to serialize food table")?
        ),
    }

    Ok(())
}

use clap::{Parser, Subcommand};

use crate::models::{ActivityLevel, FitnessGoal, Gender, MealType};

#[derive(Parser, Debug)]
#[command(author, version, about = "Healthy Bites AI: recipes, nutrition, wellness plans and a health assistant", long_about = None)]
pub struct Cli {
    /// Model identifier, overrides HEALTHY_BITES_MODEL
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API base URL, overrides HEALTHY_BITES_API_BASE
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the tools on offer
    Home,
    /// Generate a recipe from the ingredients you have
    Recipe {
        /// Ingredients on hand, e.g. "chicken, spinach, rice"
        #[arg(short, long)]
        ingredients: String,
        /// Dietary restrictions, e.g. "gluten-free"
        #[arg(short, long, default_value = "")]
        dietary: String,
        #[arg(short, long, value_enum, default_value_t = MealType::default())]
        meal_type: MealType,
    },
    /// Analyze the nutrition of a meal description
    Analyze {
        /// What you ate, e.g. "two slices of pepperoni pizza"
        description: String,
    },
    /// Generate a weekly wellness plan
    Plan {
        #[arg(long)]
        age: String,
        #[arg(long, value_enum, default_value_t = Gender::default())]
        gender: Gender,
        /// Weight in kg
        #[arg(long)]
        weight: String,
        /// Height in cm
        #[arg(long)]
        height: String,
        #[arg(long, value_enum, default_value_t = FitnessGoal::default())]
        goal: FitnessGoal,
        #[arg(long, value_enum, default_value_t = ActivityLevel::default())]
        activity_level: ActivityLevel,
    },
    /// Chat with Dr. AI (type /bmi <height_cm> <weight_kg> or /quit)
    Chat,
    /// Compute a BMI locally
    Bmi {
        /// Height in cm
        #[arg(long)]
        height: f64,
        /// Weight in kg
        #[arg(long)]
        weight: f64,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_recipe_defaults() {
        let cli = Cli::try_parse_from(["healthy-bites", "recipe", "-i", "eggs"]).unwrap();
        match cli.command {
            Some(Command::Recipe { ingredients, dietary, meal_type }) => {
                assert_eq!(ingredients, "eggs");
                assert_eq!(dietary, "");
                assert_eq!(meal_type, MealType::Dinner);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_plan_value_enums() {
        let cli = Cli::try_parse_from([
            "healthy-bites", "plan", "--age", "30", "--weight", "70", "--height", "175",
            "--goal", "muscle-gain", "--activity-level", "very-active",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Plan { goal, activity_level, gender, .. }) => {
                assert_eq!(goal, FitnessGoal::MuscleGain);
                assert_eq!(activity_level, ActivityLevel::VeryActive);
                assert_eq!(gender, Gender::Female);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_model_flag() {
        let cli = Cli::try_parse_from(["healthy-bites", "chat", "--model", "gemini-x"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("gemini-x"));
        assert!(cli.command.is_some());
    }
}

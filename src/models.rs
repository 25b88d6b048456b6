use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Workout focus the generator uses for a day without active exercise.
pub const REST_FOCUS: &str = "Rest";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct MacroNutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroNutrients {
    pub fn is_non_negative(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| *v >= 0.0)
    }

    /// Protein / carbs / fats in grams, in the order the macro charts draw them.
    pub fn macro_split(&self) -> [(&'static str, f64); 3] {
        [
            ("Protein", self.protein),
            ("Carbs", self.carbs),
            ("Fats", self.fats),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: String,
    pub macros: MacroNutrients,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    pub food_item: String,
    pub summary: String,
    pub macros: MacroNutrients,
    /// Requested on a 1-10 scale, never clamped locally.
    pub health_rating: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Good,
    Fair,
    Poor,
}

impl NutritionAnalysis {
    pub fn rating_in_scale(&self) -> bool {
        (1.0..=10.0).contains(&self.health_rating)
    }

    pub fn rating_band(&self) -> RatingBand {
        if self.health_rating >= 8.0 {
            RatingBand::Good
        } else if self.health_rating >= 5.0 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<String>,
    pub duration: String,
}

impl WorkoutDay {
    pub fn is_rest(&self) -> bool {
        self.focus == REST_FOCUS
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MealGuide {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WellnessPlan {
    pub summary: String,
    pub target_macros: MacroNutrients,
    pub weekly_schedule: Vec<WorkoutDay>,
    pub meal_guide: MealGuide,
    pub hydration_goal: String,
    pub sleep_goal: String,
}

impl WellnessPlan {
    pub const DAYS_PER_WEEK: usize = 7;

    /// Number of scheduled days whose focus is not the rest sentinel.
    pub fn active_days(&self) -> usize {
        self.weekly_schedule.iter().filter(|d| !d.is_rest()).count()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
    Dessert,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Dessert => "Dessert",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Gender {
    #[default]
    Female,
    Male,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FitnessGoal {
    #[default]
    WeightLoss,
    MuscleGain,
    Maintenance,
    ImproveEndurance,
    FlexibilityAndBalance,
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::ImproveEndurance => "Improve Endurance",
            FitnessGoal::FlexibilityAndBalance => "Flexibility & Balance",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    Moderate,
    VeryActive,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Sedentary => "Sedentary (Office job)",
            ActivityLevel::LightlyActive => "Lightly Active (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::VeryActive => "Very Active (6-7 days/week)",
        })
    }
}

/// Free-text inputs of the wellness form, passed to the generator verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WellnessProfile {
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub goal: String,
    pub activity_level: String,
}

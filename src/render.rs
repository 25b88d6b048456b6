//! Plain-text rendering of screens for the terminal front-end.

use std::fmt::Write;

use crate::bmi::BmiCategory;
use crate::models::{ChatMessage, MacroNutrients, NutritionAnalysis, RatingBand, Recipe, Role, WellnessPlan};
use crate::shell::{ViewState, BRAND, FOOTER_DISCLAIMER, NAV_ITEMS};

pub fn header(current: ViewState) -> String {
    let nav: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if item.view == current {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect();
    format!("{BRAND}  |  {}", nav.join("  "))
}

pub fn footer() -> String {
    format!("{FOOTER_DISCLAIMER}\n(c) {BRAND}. All rights reserved.")
}

pub fn home() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Eat smart, live well.");
    let _ = writeln!(out, "  recipe   AI Chef: turn the ingredients you have into a balanced recipe");
    let _ = writeln!(out, "  analyze  Nutrition: macro breakdown and a health rating for any meal");
    let _ = writeln!(out, "  chat     Dr. AI: general health questions, plus a BMI calculator");
    let _ = write!(out, "  plan     My Plan: a weekly workout and meal guide for your goal");
    out
}

fn macros(out: &mut String, macros: &MacroNutrients) {
    let _ = writeln!(out, "Calories: {} kcal", macros.calories);
    let split: Vec<String> = macros
        .macro_split()
        .iter()
        .map(|(name, grams)| format!("{name} {grams}g"))
        .collect();
    let _ = writeln!(out, "{}", split.join(" | "));
}

pub fn recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "{}", recipe.description);
    let _ = writeln!(out, "Time: {}  Difficulty: {}", recipe.cooking_time, recipe.difficulty);
    macros(&mut out, &recipe.macros);
    let _ = writeln!(out, "\nIngredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  - {ingredient}");
    }
    let _ = writeln!(out, "\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }
    out
}

pub fn analysis(analysis: &NutritionAnalysis) -> String {
    let mut out = String::new();
    let band = match analysis.rating_band() {
        RatingBand::Good => "good",
        RatingBand::Fair => "fair",
        RatingBand::Poor => "poor",
    };
    let _ = writeln!(out, "{}", analysis.food_item);
    let _ = writeln!(out, "Health rating: {}/10 ({band})", analysis.health_rating);
    let _ = writeln!(out, "{}", analysis.summary);
    macros(&mut out, &analysis.macros);
    let _ = writeln!(out, "\nSuggestions:");
    for suggestion in &analysis.suggestions {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}

pub fn plan(plan: &WellnessPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", plan.summary);
    let _ = writeln!(out, "Daily target:");
    macros(&mut out, &plan.target_macros);
    let _ = writeln!(out, "Hydration: {}  Sleep: {}", plan.hydration_goal, plan.sleep_goal);
    let _ = writeln!(out, "Active days/week: {}", plan.active_days());
    let _ = writeln!(out, "\nWeekly schedule:");
    for day in &plan.weekly_schedule {
        if day.is_rest() {
            let _ = writeln!(out, "  {:<10} Rest", day.day);
        } else {
            let _ = writeln!(
                out,
                "  {:<10} {} ({}): {}",
                day.day,
                day.focus,
                day.duration,
                day.exercises.join(", ")
            );
        }
    }
    let guide = &plan.meal_guide;
    let _ = writeln!(out, "\nMeal guide:");
    let _ = writeln!(out, "  Breakfast: {}", guide.breakfast);
    let _ = writeln!(out, "  Lunch:     {}", guide.lunch);
    let _ = writeln!(out, "  Dinner:    {}", guide.dinner);
    let _ = writeln!(out, "  Snack:     {}", guide.snack);
    out
}

pub fn chat_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "You",
        Role::Model => "Dr. AI",
    };
    format!(
        "[{}] {speaker}: {}",
        message.timestamp.format("%H:%M"),
        message.text
    )
}

pub fn bmi(bmi: f64, category: BmiCategory) -> String {
    format!("Your BMI: {bmi:.1} ({category})")
}

//! Response schemas declared to the generator for each structured result.

use crate::api_connection::endpoints::JsonSchema;

fn string_list() -> JsonSchema {
    JsonSchema::array_of(JsonSchema::string())
}

pub fn macro_nutrients_schema() -> JsonSchema {
    JsonSchema::object(vec![
        ("calories", JsonSchema::number()),
        ("protein", JsonSchema::number()),
        ("carbs", JsonSchema::number()),
        ("fats", JsonSchema::number()),
    ])
}

pub fn recipe_schema() -> JsonSchema {
    JsonSchema::object(vec![
        ("title", JsonSchema::string()),
        ("description", JsonSchema::string()),
        ("ingredients", string_list()),
        ("instructions", string_list()),
        ("cookingTime", JsonSchema::string()),
        ("difficulty", JsonSchema::string()),
        ("macros", macro_nutrients_schema()),
    ])
}

pub fn nutrition_analysis_schema() -> JsonSchema {
    JsonSchema::object(vec![
        ("foodItem", JsonSchema::string()),
        ("summary", JsonSchema::string()),
        (
            "healthRating",
            JsonSchema::number().with_description("Health rating from 1 to 10, 10 being healthiest"),
        ),
        ("suggestions", string_list()),
        ("macros", macro_nutrients_schema()),
    ])
}

pub fn wellness_plan_schema() -> JsonSchema {
    let workout_day = JsonSchema::object(vec![
        ("day", JsonSchema::string()),
        ("focus", JsonSchema::string()),
        ("exercises", string_list()),
        ("duration", JsonSchema::string()),
    ]);
    let meal_guide = JsonSchema::object(vec![
        ("breakfast", JsonSchema::string()),
        ("lunch", JsonSchema::string()),
        ("dinner", JsonSchema::string()),
        ("snack", JsonSchema::string()),
    ]);

    JsonSchema::object(vec![
        (
            "summary",
            JsonSchema::string().with_description("A brief motivational summary of the plan"),
        ),
        ("targetMacros", macro_nutrients_schema()),
        ("weeklySchedule", JsonSchema::array_of(workout_day)),
        ("mealGuide", meal_guide),
        ("hydrationGoal", JsonSchema::string()),
        ("sleepGoal", JsonSchema::string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutritionAnalysis, Recipe, WellnessPlan};
    use serde::Serialize;
    use serde_json::Value;

    /// Every key the schema requires must be a key the model type serializes.
    fn assert_schema_matches<T: Serialize>(schema: &JsonSchema, sample: &T) {
        let value = serde_json::to_value(sample).unwrap();
        check(schema, &value);
    }

    fn check(schema: &JsonSchema, value: &Value) {
        if let Some(properties) = &schema.properties {
            let object = value.as_object().expect("object value");
            assert_eq!(object.len(), properties.len());
            for (name, child) in properties {
                let field = object.get(name).unwrap_or_else(|| panic!("missing {name}"));
                check(child, field);
            }
        }
        if let (Some(items), Some(first)) = (&schema.items, value.as_array().and_then(|a| a.first())) {
            check(items, first);
        }
    }

    #[test]
    fn test_recipe_schema_matches_model() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "title": "t", "description": "d", "ingredients": ["a"], "instructions": ["b"],
            "cookingTime": "10 min", "difficulty": "Easy",
            "macros": {"calories": 1, "protein": 1, "carbs": 1, "fats": 1}
        }))
        .unwrap();
        assert_schema_matches(&recipe_schema(), &recipe);
    }

    #[test]
    fn test_analysis_schema_matches_model() {
        let analysis: NutritionAnalysis = serde_json::from_value(serde_json::json!({
            "foodItem": "f", "summary": "s", "healthRating": 5, "suggestions": ["x"],
            "macros": {"calories": 1, "protein": 1, "carbs": 1, "fats": 1}
        }))
        .unwrap();
        assert_schema_matches(&nutrition_analysis_schema(), &analysis);
    }

    #[test]
    fn test_plan_schema_matches_model() {
        let plan: WellnessPlan = serde_json::from_value(serde_json::json!({
            "summary": "s",
            "targetMacros": {"calories": 1, "protein": 1, "carbs": 1, "fats": 1},
            "weeklySchedule": [{"day": "Monday", "focus": "Rest", "exercises": [], "duration": "0"}],
            "mealGuide": {"breakfast": "b", "lunch": "l", "dinner": "d", "snack": "s"},
            "hydrationGoal": "2L", "sleepGoal": "8h"
        }))
        .unwrap();
        assert_schema_matches(&wellness_plan_schema(), &plan);
    }
}

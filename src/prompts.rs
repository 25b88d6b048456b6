use crate::models::{MealType, WellnessProfile};

/// Persona and safety policy for the health assistant, set once per chat session.
pub const HEALTH_ASSISTANT_INSTRUCTION: &str = "You are a knowledgeable and empathetic AI health assistant named 'Dr. AI'.
Your goal is to provide general health information, wellness tips, and explain medical concepts in simple terms.

IMPORTANT GUIDELINES:
1. ALWAYS include a brief disclaimer that you are an AI and not a replacement for professional medical advice.
2. If a user describes severe symptoms (chest pain, difficulty breathing, severe bleeding, sudden confusion, etc.), explicitly and urgently tell them to seek emergency care immediately.
3. Be concise but helpful. Use bullet points for lists.
4. Maintain a professional, caring, and reassuring tone.";

// User text is interpolated verbatim; nothing here escapes it.

pub fn recipe_prompt(ingredients: &str, dietary_restrictions: &str, meal_type: MealType) -> String {
    format!(
        "Create a healthy and delicious recipe using these ingredients: {ingredients}.
Dietary restrictions: {dietary_restrictions}.
Meal type: {meal_type}.
Focus on nutritional balance and flavor."
    )
}

pub fn nutrition_prompt(food_description: &str) -> String {
    format!(
        "Analyze the nutritional value of the following food/meal description: \"{food_description}\".
Provide a health rating from 1-10 (10 being healthiest), macro breakdown, and suggestions to make it healthier."
    )
}

pub fn wellness_plan_prompt(profile: &WellnessProfile) -> String {
    format!(
        "Create a comprehensive weekly wellness plan for a {age} year old {gender}, {weight}kg, {height}cm.
Goal: {goal}.
Activity Level: {activity}.

Provide:
1. A 7-day workout schedule (Monday-Sunday).
2. A sample daily meal guide (generic healthy options for Breakfast, Lunch, Dinner, Snack).
3. Daily target macros.
4. Hydration and sleep goals.",
        age = profile.age,
        gender = profile.gender,
        weight = profile.weight,
        height = profile.height,
        goal = profile.goal,
        activity = profile.activity_level,
    )
}

//! In-memory model double shared by the unit tests.

use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::endpoints::GenerateContentRequest;
use crate::gateway::GenerativeModel;

/// Replays queued replies in order and records every request it receives.
/// An exhausted queue answers with no text.
#[derive(Default)]
pub(crate) struct ScriptedModel {
    replies: Mutex<VecDeque<Result<Option<String>, ApiConnectionError>>>,
    requests: Mutex<Vec<GenerateContentRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_text(&self, text: &str) {
        self.replies.lock().unwrap().push_back(Ok(Some(text.to_string())));
    }

    pub(crate) fn push_empty(&self) {
        self.replies.lock().unwrap().push_back(Ok(None));
    }

    pub(crate) fn push_api_error(&self, status: StatusCode, body: &str) {
        self.replies.lock().unwrap().push_back(Err(ApiConnectionError::Api {
            status,
            error_body: body.to_string(),
        }));
    }

    pub(crate) fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl GenerativeModel for ScriptedModel {
    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<Option<String>, ApiConnectionError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        // Give concurrently polled callers a chance to overlap.
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }

        let reply = self.replies.lock().unwrap().pop_front().unwrap_or(Ok(None));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }
}

pub(crate) fn recipe_json() -> String {
    serde_json::json!({
        "title": "Garlic Tofu Stir-Fry",
        "description": "Crispy tofu with wilted spinach.",
        "ingredients": ["200g tofu", "2 cups spinach", "2 cloves garlic"],
        "instructions": ["Press the tofu.", "Sear until golden.", "Add spinach and garlic."],
        "cookingTime": "25 mins",
        "difficulty": "Easy",
        "macros": {"calories": 380, "protein": 24, "carbs": 18, "fats": 22}
    })
    .to_string()
}

pub(crate) fn analysis_json() -> String {
    serde_json::json!({
        "foodItem": "Oatmeal with banana",
        "summary": "A fibre-rich breakfast.",
        "healthRating": 8,
        "suggestions": ["Add nuts for protein."],
        "macros": {"calories": 320, "protein": 9, "carbs": 58, "fats": 6}
    })
    .to_string()
}

pub(crate) fn plan_json() -> String {
    let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
    let schedule: Vec<_> = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let rest = i == 2 || i == 6;
            let (focus, exercises, duration) = if rest {
                ("Rest", Vec::new(), "0 min")
            } else {
                ("Strength", vec!["Squats 3x10", "Push-ups 3x12"], "45 min")
            };
            serde_json::json!({
                "day": day,
                "focus": focus,
                "exercises": exercises,
                "duration": duration
            })
        })
        .collect();
    serde_json::json!({
        "summary": "Build strength steadily.",
        "targetMacros": {"calories": 2100, "protein": 140, "carbs": 220, "fats": 70},
        "weeklySchedule": schedule,
        "mealGuide": {
            "breakfast": "Greek yogurt with berries",
            "lunch": "Chicken quinoa bowl",
            "dinner": "Salmon with vegetables",
            "snack": "Almonds"
        },
        "hydrationGoal": "2.5 Liters",
        "sleepGoal": "7-8 Hours"
    })
    .to_string()
}

use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::endpoints::{
    Content, GenerateContentRequest, GenerationConfig, JsonSchema,
};
use crate::chat_session::ChatSession;
use crate::models::{MealType, NutritionAnalysis, Recipe, WellnessPlan, WellnessProfile};
use crate::prompts::{
    nutrition_prompt, recipe_prompt, wellness_plan_prompt, HEALTH_ASSISTANT_INSTRUCTION,
};
use crate::schemas::{nutrition_analysis_schema, recipe_schema, wellness_plan_schema};

/// Remote generation endpoint. Returns the reply text, or `None` when the
/// provider answered without any.
pub trait GenerativeModel: Send + Sync {
    fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<Option<String>, ApiConnectionError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyResponse,
    MalformedResponse,
    TransportFailure,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("No response from AI")]
    EmptyResponse,
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("Transport failure: {0}")]
    TransportFailure(#[from] ApiConnectionError),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::EmptyResponse => ErrorKind::EmptyResponse,
            GatewayError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            GatewayError::TransportFailure(_) => ErrorKind::TransportFailure,
        }
    }
}

/// Removes a surrounding Markdown code fence, if the model added one.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !trimmed.ends_with("```") {
        return trimmed;
    }
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    strip_language_tag(inner).trim_end_matches("```").trim()
}

/// Drops the info string after an opening fence. Any tag is dropped when a
/// newline follows it; `json` in any case is dropped even on a single line.
fn strip_language_tag(fenced: &str) -> &str {
    let tag_len = fenced
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(fenced.len());
    let (tag, rest) = fenced.split_at(tag_len);
    if tag.is_empty() {
        fenced
    } else if tag.eq_ignore_ascii_case("json") || rest.starts_with(['\n', '\r']) {
        rest
    } else {
        fenced
    }
}

/// Deserializes reply text into `T`. Missing fields or wrong types are a hard failure.
pub fn parse_structured<T: DeserializeOwned>(text: Option<String>) -> Result<T, GatewayError> {
    let text = text.ok_or(GatewayError::EmptyResponse)?;
    let content = strip_code_fence(&text);
    if content.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    serde_json::from_str(content).map_err(|e| {
        tracing::error!("Failed to deserialize model output: {}", e);
        GatewayError::MalformedResponse(e)
    })
}

/// Builds prompts, declares the expected schema and parses replies into domain types.
#[derive(Debug)]
pub struct HealthGateway<M> {
    model: Arc<M>,
}

impl<M> Clone for HealthGateway<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: GenerativeModel> HealthGateway<M> {
    pub fn new(model: M) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    async fn generate_structured<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: JsonSchema,
    ) -> Result<T, GatewayError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(&prompt)],
            system_instruction: None,
            generation_config: Some(GenerationConfig::json(schema)),
        };
        let text = self.model.generate(request).await?;
        parse_structured(text)
    }

    pub async fn generate_recipe(
        &self,
        ingredients: &str,
        dietary_restrictions: &str,
        meal_type: MealType,
    ) -> Result<Recipe, GatewayError> {
        tracing::info!(%meal_type, "generating recipe");
        let prompt = recipe_prompt(ingredients, dietary_restrictions, meal_type);
        let recipe: Recipe = self.generate_structured(prompt, recipe_schema()).await?;
        if !recipe.macros.is_non_negative() {
            tracing::warn!(title = %recipe.title, "recipe macros contain negative values");
        }
        Ok(recipe)
    }

    pub async fn analyze_nutrition(
        &self,
        food_description: &str,
    ) -> Result<NutritionAnalysis, GatewayError> {
        tracing::info!("analyzing nutrition");
        let prompt = nutrition_prompt(food_description);
        let analysis: NutritionAnalysis = self
            .generate_structured(prompt, nutrition_analysis_schema())
            .await?;
        if !analysis.rating_in_scale() {
            tracing::warn!(
                rating = analysis.health_rating,
                "health rating outside the requested 1-10 scale"
            );
        }
        if !analysis.macros.is_non_negative() {
            tracing::warn!(food = %analysis.food_item, "analysis macros contain negative values");
        }
        Ok(analysis)
    }

    pub async fn generate_wellness_plan(
        &self,
        profile: &WellnessProfile,
    ) -> Result<WellnessPlan, GatewayError> {
        tracing::info!(goal = %profile.goal, "generating wellness plan");
        let prompt = wellness_plan_prompt(profile);
        let plan: WellnessPlan = self
            .generate_structured(prompt, wellness_plan_schema())
            .await?;
        if plan.weekly_schedule.len() != WellnessPlan::DAYS_PER_WEEK {
            tracing::warn!(
                days = plan.weekly_schedule.len(),
                "wellness plan schedule does not cover exactly one week"
            );
        }
        Ok(plan)
    }

    /// Opens a multi-turn session carrying the health-assistant persona.
    pub fn create_health_chat_session(&self) -> ChatSession<M> {
        tracing::debug!("opening health chat session");
        ChatSession::new(Arc::clone(&self.model), HEALTH_ASSISTANT_INSTRUCTION)
    }
}

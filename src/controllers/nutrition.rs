use super::{require, RequestController, RequestState, SubmitError};
use crate::gateway::{GenerativeModel, HealthGateway};
use crate::models::NutritionAnalysis;

pub const NUTRITION_FAILURE_MESSAGE: &str = "Failed to analyze nutrition. Please try again.";

#[derive(Debug)]
pub struct NutritionScreen {
    pub food_description: String,
    controller: RequestController<NutritionAnalysis>,
}

impl Default for NutritionScreen {
    fn default() -> Self {
        Self {
            food_description: String::new(),
            controller: RequestController::new(NUTRITION_FAILURE_MESSAGE),
        }
    }
}

impl NutritionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<NutritionAnalysis> {
        self.controller.state()
    }

    pub fn analysis(&self) -> Option<&NutritionAnalysis> {
        self.controller.result()
    }

    pub fn can_submit(&self) -> bool {
        !self.controller.is_loading() && !self.food_description.trim().is_empty()
    }

    pub async fn submit<M: GenerativeModel>(
        &mut self,
        gateway: &HealthGateway<M>,
    ) -> Result<(), SubmitError> {
        require(&self.food_description, "food description")?;
        let ticket = self.controller.begin()?;
        let outcome = gateway.analyze_nutrition(&self.food_description).await;
        self.controller.finish(ticket, outcome);
        Ok(())
    }
}

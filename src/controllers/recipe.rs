use super::{require, RequestController, RequestState, SubmitError};
use crate::gateway::{GenerativeModel, HealthGateway};
use crate::models::{MealType, Recipe};

pub const RECIPE_FAILURE_MESSAGE: &str = "Failed to generate recipe. Please try again.";

#[derive(Debug)]
pub struct RecipeScreen {
    pub ingredients: String,
    pub dietary_restrictions: String,
    pub meal_type: MealType,
    controller: RequestController<Recipe>,
}

impl Default for RecipeScreen {
    fn default() -> Self {
        Self {
            ingredients: String::new(),
            dietary_restrictions: String::new(),
            meal_type: MealType::default(),
            controller: RequestController::new(RECIPE_FAILURE_MESSAGE),
        }
    }
}

impl RecipeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<Recipe> {
        self.controller.state()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.controller.result()
    }

    pub fn can_submit(&self) -> bool {
        !self.controller.is_loading() && !self.ingredients.trim().is_empty()
    }

    pub async fn submit<M: GenerativeModel>(
        &mut self,
        gateway: &HealthGateway<M>,
    ) -> Result<(), SubmitError> {
        require(&self.ingredients, "ingredients")?;
        let ticket = self.controller.begin()?;
        let outcome = gateway
            .generate_recipe(&self.ingredients, &self.dietary_restrictions, self.meal_type)
            .await;
        self.controller.finish(ticket, outcome);
        Ok(())
    }
}

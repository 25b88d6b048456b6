use super::{require, require_number, RequestController, RequestState, SubmitError};
use crate::gateway::{GenerativeModel, HealthGateway};
use crate::models::{ActivityLevel, FitnessGoal, Gender, WellnessPlan, WellnessProfile};

pub const WELLNESS_FAILURE_MESSAGE: &str = "Failed to generate wellness plan. Please try again.";

/// The form stays up until a plan exists; then the plan replaces it for good.
#[derive(Debug, PartialEq)]
pub enum WellnessView<'a> {
    Form {
        loading: bool,
        error: Option<&'a str>,
    },
    Plan(&'a WellnessPlan),
}

#[derive(Debug)]
pub struct WellnessScreen {
    pub profile: WellnessProfile,
    controller: RequestController<WellnessPlan>,
}

impl Default for WellnessScreen {
    fn default() -> Self {
        Self {
            profile: WellnessProfile {
                gender: Gender::default().to_string(),
                goal: FitnessGoal::default().to_string(),
                activity_level: ActivityLevel::default().to_string(),
                ..WellnessProfile::default()
            },
            controller: RequestController::new(WELLNESS_FAILURE_MESSAGE),
        }
    }
}

impl WellnessScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<WellnessPlan> {
        self.controller.state()
    }

    pub fn plan(&self) -> Option<&WellnessPlan> {
        self.controller.result()
    }

    pub fn view(&self) -> WellnessView<'_> {
        match self.controller.state() {
            RequestState::Success(plan) => WellnessView::Plan(plan),
            RequestState::Loading => WellnessView::Form {
                loading: true,
                error: None,
            },
            RequestState::Failure(message) => WellnessView::Form {
                loading: false,
                error: Some(message.as_str()),
            },
            RequestState::Idle => WellnessView::Form {
                loading: false,
                error: None,
            },
        }
    }

    fn validate(&self) -> Result<(), SubmitError> {
        require_number(&self.profile.age, "age")?;
        require(&self.profile.gender, "gender")?;
        require_number(&self.profile.weight, "weight")?;
        require_number(&self.profile.height, "height")?;
        require(&self.profile.goal, "goal")?;
        require(&self.profile.activity_level, "activity level")
    }

    pub async fn submit<M: GenerativeModel>(
        &mut self,
        gateway: &HealthGateway<M>,
    ) -> Result<(), SubmitError> {
        if self.plan().is_some() {
            return Err(SubmitError::AlreadyComplete);
        }
        self.validate()?;
        let ticket = self.controller.begin()?;
        let outcome = gateway.generate_wellness_plan(&self.profile).await;
        self.controller.finish(ticket, outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{plan_json, ScriptedModel};

    fn filled_screen() -> WellnessScreen {
        let mut screen = WellnessScreen::new();
        screen.profile.age = "29".to_string();
        screen.profile.weight = "80".to_string();
        screen.profile.height = "182".to_string();
        screen
    }

    #[test]
    fn test_form_defaults() {
        let screen = WellnessScreen::new();
        assert_eq!(screen.profile.gender, "Female");
        assert_eq!(screen.profile.goal, "Weight Loss");
        assert_eq!(screen.profile.activity_level, "Moderate (3-5 days/week)");
        assert_eq!(
            screen.view(),
            WellnessView::Form {
                loading: false,
                error: None
            }
        );
    }

    #[tokio::test]
    async fn test_plan_replaces_form_permanently() {
        let model = ScriptedModel::new();
        model.push_text(&plan_json());
        let gateway = HealthGateway::new(model);

        let mut screen = filled_screen();
        screen.submit(&gateway).await.unwrap();

        match screen.view() {
            WellnessView::Plan(plan) => {
                assert_eq!(plan.weekly_schedule.len(), 7);
                assert_eq!(plan.active_days(), 5);
            }
            other => panic!("expected plan view, got {other:?}"),
        }
        assert_eq!(screen.submit(&gateway).await, Err(SubmitError::AlreadyComplete));
        assert_eq!(gateway.model().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_plan_keeps_form() {
        let model = ScriptedModel::new();
        model.push_text(r#"{"summary": "incomplete"}"#);
        let gateway = HealthGateway::new(model);

        let mut screen = filled_screen();
        screen.submit(&gateway).await.unwrap();
        assert_eq!(
            screen.view(),
            WellnessView::Form {
                loading: false,
                error: Some(WELLNESS_FAILURE_MESSAGE)
            }
        );
    }

    #[tokio::test]
    async fn test_non_numeric_weight_is_rejected() {
        let gateway = HealthGateway::new(ScriptedModel::new());
        let mut screen = filled_screen();
        screen.profile.weight = "heavy".to_string();
        assert_eq!(
            screen.submit(&gateway).await,
            Err(SubmitError::NotNumeric("weight"))
        );
    }
}

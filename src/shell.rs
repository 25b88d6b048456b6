use crate::controllers::{HealthAssistantScreen, NutritionScreen, RecipeScreen, WellnessScreen};
use crate::gateway::{GenerativeModel, HealthGateway};

pub const BRAND: &str = "Healthy Bites AI";
pub const FOOTER_DISCLAIMER: &str =
    "AI generated content may be inaccurate. Please consult a professional nutritionist for medical advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    RecipeGenerator,
    NutritionAnalyzer,
    HealthAssistant,
    WellnessPlanner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub view: ViewState,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", view: ViewState::Home },
    NavItem { label: "AI Chef", view: ViewState::RecipeGenerator },
    NavItem { label: "Nutrition", view: ViewState::NutritionAnalyzer },
    NavItem { label: "Dr. AI", view: ViewState::HealthAssistant },
    NavItem { label: "My Plan", view: ViewState::WellnessPlanner },
];

/// The mounted screen. Navigating away drops it together with its state.
pub enum Screen<M> {
    Home,
    Recipe(RecipeScreen),
    Nutrition(NutritionScreen),
    HealthAssistant(Box<HealthAssistantScreen<M>>),
    Wellness(WellnessScreen),
}

/// Top-level view switch owning the gateway and the current screen.
pub struct Shell<M> {
    gateway: HealthGateway<M>,
    current: ViewState,
    screen: Screen<M>,
}

impl<M: GenerativeModel> Shell<M> {
    pub fn new(gateway: HealthGateway<M>) -> Self {
        Self {
            gateway,
            current: ViewState::Home,
            screen: Screen::Home,
        }
    }

    pub fn gateway(&self) -> &HealthGateway<M> {
        &self.gateway
    }

    pub fn current_view(&self) -> ViewState {
        self.current
    }

    /// Mounts a fresh screen for `view`; selecting the current view keeps it.
    pub fn navigate(&mut self, view: ViewState) {
        if view == self.current {
            return;
        }
        tracing::debug!(from = ?self.current, to = ?view, "navigating");
        self.screen = match view {
            ViewState::Home => Screen::Home,
            ViewState::RecipeGenerator => Screen::Recipe(RecipeScreen::new()),
            ViewState::NutritionAnalyzer => Screen::Nutrition(NutritionScreen::new()),
            ViewState::HealthAssistant => {
                Screen::HealthAssistant(Box::new(HealthAssistantScreen::mount(&self.gateway)))
            }
            ViewState::WellnessPlanner => Screen::Wellness(WellnessScreen::new()),
        };
        self.current = view;
    }

    pub fn screen(&self) -> &Screen<M> {
        &self.screen
    }

    /// Splits the shell into the gateway and the mounted screen so a screen
    /// can submit through the gateway while being mutated.
    pub fn parts_mut(&mut self) -> (&HealthGateway<M>, &mut Screen<M>) {
        (&self.gateway, &mut self.screen)
    }

    pub fn recipe_mut(&mut self) -> Option<&mut RecipeScreen> {
        match &mut self.screen {
            Screen::Recipe(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn health_assistant_mut(&mut self) -> Option<&mut HealthAssistantScreen<M>> {
        match &mut self.screen {
            Screen::HealthAssistant(screen) => Some(screen.as_mut()),
            _ => None,
        }
    }
}

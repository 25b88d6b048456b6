//! Per-screen request state machines.
//!
//! Every screen moves through `Idle -> Loading -> Success | Failure` and back
//! to `Loading` on resubmission. While `Loading`, further submissions are
//! refused. Each accepted submission gets a [`Ticket`]; only the latest ticket
//! may resolve the state, so a stale completion can never overwrite it.

use std::fmt;
use thiserror::Error;

pub mod health_assistant;
pub mod nutrition;
pub mod recipe;
pub mod wellness;

pub use health_assistant::{HealthAssistantScreen, ScrollAnchor};
pub use nutrition::NutritionScreen;
pub use recipe::RecipeScreen;
pub use wellness::{WellnessScreen, WellnessView};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    /// Holds the screen's fixed user-facing message, never the raw error.
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a request is already in progress")]
    Busy,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("a plan has already been generated")]
    AlreadyComplete,
}

#[derive(Debug)]
pub struct RequestController<T> {
    state: RequestState<T>,
    issued: u64,
    failure_message: &'static str,
}

impl<T> RequestController<T> {
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
            failure_message,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Enters `Loading`, discarding any previous result or error.
    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.is_loading() {
            return Err(SubmitError::Busy);
        }
        self.issued += 1;
        self.state = RequestState::Loading;
        Ok(Ticket(self.issued))
    }

    /// Resolves the submission identified by `ticket`. Returns `false` and
    /// leaves the state alone when the ticket is stale.
    pub fn finish<E: fmt::Display>(&mut self, ticket: Ticket, outcome: Result<T, E>) -> bool {
        if ticket.0 != self.issued || !self.is_loading() {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "ignoring stale completion");
            return false;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Success(value),
            Err(e) => {
                tracing::error!(error = %e, "{}", self.failure_message);
                RequestState::Failure(self.failure_message.to_string())
            }
        };
        true
    }
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), SubmitError> {
    if value.trim().is_empty() {
        Err(SubmitError::MissingField(field))
    } else {
        Ok(())
    }
}

pub(crate) fn require_number(value: &str, field: &'static str) -> Result<(), SubmitError> {
    require(value, field)?;
    value
        .trim()
        .parse::<f64>()
        .map(|_| ())
        .map_err(|_| SubmitError::NotNumeric(field))
}

use chrono::Duration;

use super::SubmitError;
use crate::bmi::{classify, compute_bmi_from_input, BmiCategory};
use crate::chat_session::ChatSession;
use crate::gateway::{ErrorKind, GatewayError, GenerativeModel, HealthGateway};
use crate::models::{ChatMessage, Role};

pub const GREETING: &str = "Hello! I'm Dr. AI. I can help you with general health questions, symptom information, and wellness advice. How can I assist you today?";
pub const ERROR_REPLY: &str =
    "I apologize, but I encountered an error. Please try asking your question again.";
pub const EMPTY_REPLY: &str = "I'm having trouble connecting right now. Please try again.";
pub const DISCLAIMER: &str = "The AI Health Assistant provides general information only. It does not replace professional medical diagnosis or treatment. For any medical concern, please consult a healthcare professional.";

/// Element the message view must keep in sight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollAnchor {
    Message(String),
    TypingIndicator,
}

/// Chat with the health assistant plus the BMI side panel.
///
/// The session is opened when the screen is mounted and dropped with it.
pub struct HealthAssistantScreen<M> {
    session: ChatSession<M>,
    messages: Vec<ChatMessage>,
    typing: bool,
    pub input: String,
    pub height_input: String,
    pub weight_input: String,
    bmi: Option<f64>,
}

impl<M: GenerativeModel> HealthAssistantScreen<M> {
    pub fn mount(gateway: &HealthGateway<M>) -> Self {
        Self {
            session: gateway.create_health_chat_session(),
            messages: vec![ChatMessage::new(Role::Model, GREETING)],
            typing: false,
            input: String::new(),
            height_input: String::new(),
            weight_input: String::new(),
            bmi: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn can_send(&self) -> bool {
        !self.typing && !self.input.trim().is_empty()
    }

    pub fn scroll_anchor(&self) -> ScrollAnchor {
        match self.messages.last() {
            Some(last) if !self.typing => ScrollAnchor::Message(last.id.clone()),
            _ => ScrollAnchor::TypingIndicator,
        }
    }

    fn push_message(&mut self, mut message: ChatMessage) {
        if let Some(last) = self.messages.last() {
            if message.timestamp <= last.timestamp {
                message.timestamp = last.timestamp + Duration::microseconds(1);
            }
        }
        self.messages.push(message);
    }

    /// Appends the user's message, clears the input and shows the typing
    /// indicator. Returns the text to send.
    pub fn begin_send(&mut self) -> Result<String, SubmitError> {
        if self.typing {
            return Err(SubmitError::Busy);
        }
        if self.input.trim().is_empty() {
            return Err(SubmitError::MissingField("message"));
        }
        let text = std::mem::take(&mut self.input);
        self.push_message(ChatMessage::new(Role::User, text.clone()));
        self.typing = true;
        Ok(text)
    }

    /// Appends the reply, or a fallback bubble when the turn failed.
    pub fn finish_send(&mut self, outcome: Result<String, GatewayError>) {
        let reply = match outcome {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::EmptyResponse => {
                tracing::warn!("chat reply carried no text");
                EMPTY_REPLY.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat error");
                ERROR_REPLY.to_string()
            }
        };
        self.push_message(ChatMessage::new(Role::Model, reply));
        self.typing = false;
    }

    pub async fn send(&mut self) -> Result<(), SubmitError> {
        let text = self.begin_send()?;
        let outcome = self.session.send_message(&text).await;
        self.finish_send(outcome);
        Ok(())
    }

    /// Recomputes the BMI from the panel inputs; invalid input changes nothing.
    pub fn calculate_bmi(&mut self) -> Option<f64> {
        if let Some(bmi) = compute_bmi_from_input(&self.height_input, &self.weight_input) {
            self.bmi = Some(bmi);
        }
        self.bmi
    }

    pub fn bmi(&self) -> Option<f64> {
        self.bmi
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi.map(classify)
    }
}

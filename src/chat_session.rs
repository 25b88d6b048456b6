use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api_connection::endpoints::{Content, GenerateContentRequest};
use crate::gateway::{GatewayError, GenerativeModel};

/// Stateful multi-turn conversation with the remote model.
///
/// Turn history lives here and is replayed on every call. Sends on one
/// session are serialized: a second `send_message` waits until the first
/// has resolved. A failed turn leaves the history untouched.
pub struct ChatSession<M> {
    model: Arc<M>,
    system_instruction: Content,
    history: Mutex<Vec<Content>>,
}

impl<M: GenerativeModel> ChatSession<M> {
    pub(crate) fn new(model: Arc<M>, system_instruction: &str) -> Self {
        Self {
            model,
            system_instruction: Content::system(system_instruction),
            history: Mutex::new(Vec::new()),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<String, GatewayError> {
        let mut history = self.history.lock().await;

        let mut contents = history.clone();
        contents.push(Content::user(text));
        let request = GenerateContentRequest {
            contents: contents.clone(),
            system_instruction: Some(self.system_instruction.clone()),
            generation_config: None,
        };

        let reply = self
            .model
            .generate(request)
            .await?
            .ok_or(GatewayError::EmptyResponse)?;

        contents.push(Content::model(&reply));
        *history = contents;
        tracing::debug!(turns = history.len(), "chat turn recorded");
        Ok(reply)
    }

    /// Number of user and model turns recorded so far.
    pub async fn turn_count(&self) -> usize {
        self.history.lock().await.len()
    }
}

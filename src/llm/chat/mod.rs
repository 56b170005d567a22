#[cfg(test)]
pub mod fake;
pub mod ollama;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use super::LlmConfig;
use self::ollama::OllamaClient;
use crate::models::chat::ChatMessage;

/// Outcome of one chat call. `Unavailable` covers every way the backend can
/// fail to answer; an empty `Reply` means the backend answered with nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Reply(String),
    Unavailable,
}

impl Completion {
    /// The reply text, unless the backend was unavailable or said nothing.
    pub fn into_text(self) -> Option<String> {
        match self {
            Completion::Reply(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid chat endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends the whole conversation in one non-streaming call. Never retries
    /// and never fails; errors surface as [`Completion::Unavailable`].
    async fn complete(&self, messages: &[ChatMessage]) -> Completion;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> Option<String>;
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, ChatError> {
    let client = OllamaClient::from_config(config)?;
    Ok(Arc::new(client))
}

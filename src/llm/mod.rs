pub mod chat;

use std::time::Duration;
use url::Url;

pub const DEFAULT_CHAT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_CHAT_MODEL: &str = "llama3";
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

/// Model endpoint settings. Built once at startup and handed to the chat
/// client; never changed afterwards.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: Url,
    pub completion_model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(
        base_url: &str,
        completion_model: impl Into<String>,
        timeout: Duration
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            completion_model: completion_model.into(),
            timeout,
        })
    }
}

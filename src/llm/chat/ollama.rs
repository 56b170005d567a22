use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use async_trait::async_trait;
use super::{ ChatClient, ChatError, Completion };
use crate::config::endpoint_url;
use crate::llm::LlmConfig;
use crate::models::chat::ChatMessage;
use log::{ info, error };
use url::Url;

const PREVIEW_CHARS: usize = 100;

#[derive(Debug)]
pub struct OllamaClient {
    http: HttpClient,
    chat_url: Url,
    completion_model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatResponse {
    // A body without `message.content` is an empty answer, not a failure.
    fn into_content(self) -> String {
        self.message.and_then(|m| m.content).unwrap_or_default()
    }
}

impl OllamaClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatError> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            chat_url: endpoint_url(&config.base_url, "api/chat")?,
            completion_model: config.completion_model.clone(),
        })
    }

    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let req = ChatRequest {
            model: &self.completion_model,
            messages,
            stream: false,
        };
        let resp = self.http
            .post(self.chat_url.clone())
            .json(&req)
            .send().await?
            .error_for_status()?;
        let data = resp.json::<ChatResponse>().await?;
        Ok(data.into_content())
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Completion {
        info!(
            "[Ollama] Calling {} with model {} ({} messages)",
            self.chat_url,
            self.completion_model,
            messages.len()
        );
        match self.chat(messages).await {
            Ok(content) => {
                info!("[Ollama] Success: {}...", preview(&content));
                Completion::Reply(content)
            }
            Err(e) => {
                error!(
                    "[Ollama] Chat call to {} (model {}) failed: {}",
                    self.chat_url,
                    self.completion_model,
                    e
                );
                Completion::Unavailable
            }
        }
    }

    fn get_model(&self) -> String {
        self.completion_model.clone()
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.chat_url.to_string())
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

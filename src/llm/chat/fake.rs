//! Chat client with a scripted answer that records what it was sent.

use async_trait::async_trait;
use std::sync::Mutex;
use super::{ ChatClient, Completion };
use crate::models::chat::ChatMessage;

#[derive(Debug)]
pub struct FakeChatClient {
    reply: Completion,
    /// Every conversation received, in call order.
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeChatClient {
    pub fn replying(text: &str) -> Self {
        Self::with_completion(Completion::Reply(text.to_string()))
    }

    pub fn unavailable() -> Self {
        Self::with_completion(Completion::Unavailable)
    }

    pub fn with_completion(reply: Completion) -> Self {
        Self { reply, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for FakeChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Completion {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
        self.reply.clone()
    }

    fn get_model(&self) -> String {
        "fake".to_string()
    }

    fn get_base_url(&self) -> Option<String> {
        None
    }
}

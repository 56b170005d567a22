use crate::config::prompt;
use crate::llm::chat::ChatClient;
use crate::models::chat::{ ChatMessage, Conversation, Role };
use log::{ debug, info, warn };
use std::sync::Arc;

/// Returns the conversation with a CoCo system message in front, unless it
/// already starts with a system message. The input is left untouched.
pub fn ensure_system_preamble(conversation: &[ChatMessage], user_name: &str) -> Conversation {
    match conversation.first() {
        Some(first) if first.role == Role::System => conversation.to_vec(),
        _ => {
            let mut augmented = Vec::with_capacity(conversation.len() + 1);
            augmented.push(ChatMessage::system(prompt::system_preamble(user_name)));
            augmented.extend_from_slice(conversation);
            augmented
        }
    }
}

/// Produces the assistant's next chat turn. Holds no history; every call
/// works only on the conversation it is given.
#[derive(Clone)]
pub struct ConversationManager {
    chat_client: Arc<dyn ChatClient>,
}

impl ConversationManager {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn respond(&self, conversation: &[ChatMessage], user_name: &str) -> String {
        let messages = ensure_system_preamble(conversation, user_name);
        info!(
            "[CoCo Chat] Sending {} messages to {}",
            messages.len(),
            self.chat_client.get_model()
        );

        match self.chat_client.complete(&messages).await.into_text() {
            Some(reply) => reply,
            None => {
                warn!("[CoCo Chat] Model returned no response, using canned reply");
                debug!("[CoCo Chat] Messages sent: {:?}", messages);
                fallback_reply(&messages, user_name)
            }
        }
    }
}

// Looks at the last message actually sent, so an empty conversation is judged
// by the generated preamble.
fn fallback_reply(messages: &[ChatMessage], user_name: &str) -> String {
    let asks_for_help = messages
        .last()
        .map(|m| m.content.to_lowercase().contains("help"))
        .unwrap_or(false);

    if asks_for_help {
        prompt::help_fallback(user_name)
    } else {
        prompt::generic_fallback(user_name)
    }
}

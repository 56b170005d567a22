use crate::config::prompt;
use crate::llm::chat::ChatClient;
use crate::models::chat::ChatMessage;
use crate::models::recipe::Recipe;
use log::{ info, warn };
use std::sync::Arc;

#[derive(Clone)]
pub struct SummaryGenerator {
    chat_client: Arc<dyn ChatClient>,
}

impl SummaryGenerator {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Two or three sentences about the recipe. Falls back to a templated
    /// description when the model is unavailable or answers with nothing, so
    /// the result is never empty.
    pub async fn summarize(&self, recipe: &Recipe) -> String {
        let prompt = prompt::recipe_summary_prompt(
            &recipe.name,
            &recipe.category,
            &recipe.area,
            &recipe.ingredients,
            &recipe.steps
        );
        let messages = [ChatMessage::user(prompt)];

        match self.chat_client.complete(&messages).await.into_text() {
            Some(text) => {
                info!("Generated AI summary for '{}'", recipe.name);
                text
            }
            None => {
                warn!("No AI summary for '{}', using fallback text", recipe.name);
                prompt::summary_fallback(&recipe.category, &recipe.area, &recipe.ingredients)
            }
        }
    }
}

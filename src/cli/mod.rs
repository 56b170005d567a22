use clap::Parser;
use crate::llm::{ DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_CHAT_TIMEOUT_SECS };
use crate::recipe::mealdb::DEFAULT_MEALDB_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Server Args ---
    /// Host address and port for the HTTP API to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "0.0.0.0:3001")]
    pub server_addr: String,

    /// Browser origin allowed to call the API (the web client's URL).
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:5173")]
    pub cors_origin: String,

    // --- Chat LLM Args ---
    /// Base URL of the Ollama server used for chat and summaries.
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = DEFAULT_CHAT_BASE_URL)]
    pub chat_base_url: String,

    /// Model name for chat completion (e.g., llama3, mistral, cogito:3b)
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub chat_model: String,

    /// Upper bound in seconds for a single chat call. Slower calls fall back to canned replies.
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = DEFAULT_CHAT_TIMEOUT_SECS)]
    pub chat_timeout_secs: u64,

    // --- Recipe Source Args ---
    /// Base URL of the TheMealDB-compatible recipe API.
    #[arg(long, env = "MEALDB_BASE_URL", default_value = DEFAULT_MEALDB_BASE_URL)]
    pub mealdb_base_url: String,

    /// How many recipes of a category are fetched in full.
    #[arg(long, env = "MEALDB_CATEGORY_LIMIT", default_value = "5")]
    pub category_limit: usize,
}

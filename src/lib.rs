pub mod cli;
pub mod companion;
pub mod config;
pub mod llm;
pub mod models;
pub mod recipe;
pub mod server;

use cli::Args;
use config::AppConfig;
use llm::chat::new_client as new_chat_client;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::from_args(&args)?;

    info!("--- Core Configuration ---");
    info!("Server Address: {}", config.server_addr);
    info!("CORS Origin: {}", args.cors_origin);
    info!("Chat Base URL: {}", config.llm.base_url);
    info!("Chat Model: {}", config.llm.completion_model);
    info!("Chat Timeout: {}s", config.llm.timeout.as_secs());
    info!("MealDB Base URL: {}", config.mealdb.base_url);
    info!("Category Lookup Limit: {}", config.mealdb.category_limit);
    info!("-------------------------");

    let chat_client = new_chat_client(&config.llm)?;
    info!(
        "Chat client configured: Model={}, Endpoint={}",
        chat_client.get_model(),
        chat_client.get_base_url().as_deref().unwrap_or("none")
    );

    let server = Server::new(config, chat_client);
    server.run().await?;

    Ok(())
}

pub mod api;

use crate::companion::{ ConversationManager, SummaryGenerator };
use crate::config::AppConfig;
use crate::llm::chat::ChatClient;
use crate::recipe::mealdb::MealDbClient;
use api::AppState;
use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Server {
    config: AppConfig,
    state: AppState,
}

impl Server {
    pub fn new(config: AppConfig, chat_client: Arc<dyn ChatClient>) -> Self {
        let state = AppState {
            recipes: MealDbClient::new(config.mealdb.clone()),
            summaries: SummaryGenerator::new(chat_client.clone()),
            companion: ConversationManager::new(chat_client),
        };
        Self { config, state }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::router(self.state.clone(), self.config.cors_origin.clone());
        let listener = TcpListener::bind(&self.config.server_addr).await.map_err(|e|
            format!("Failed to bind HTTP server to {}: {}. Try a different port.", self.config.server_addr, e)
        )?;

        info!("CoCo backend listening on: http://{}", self.config.server_addr);
        info!("CORS enabled for {:?}", self.config.cors_origin);
        axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

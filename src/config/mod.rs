pub mod prompt;

use crate::cli::Args;
use crate::llm::LlmConfig;
use crate::recipe::mealdb::MealDbConfig;
use axum::http::HeaderValue;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name} '{value}': {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("Chat timeout must be at least one second")]
    ZeroTimeout,
}

/// Everything the service needs, resolved and validated from [`Args`] once at
/// startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: String,
    pub cors_origin: HeaderValue,
    pub llm: LlmConfig,
    pub mealdb: MealDbConfig,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.chat_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let llm = LlmConfig::new(
            &args.chat_base_url,
            args.chat_model.clone(),
            Duration::from_secs(args.chat_timeout_secs)
        ).map_err(|source| ConfigError::InvalidUrl {
            name: "chat base URL",
            value: args.chat_base_url.clone(),
            source,
        })?;

        let mealdb_url = Url::parse(&args.mealdb_base_url).map_err(|source| ConfigError::InvalidUrl {
            name: "MealDB base URL",
            value: args.mealdb_base_url.clone(),
            source,
        })?;

        let cors_origin = HeaderValue::from_str(args.cors_origin.trim()).map_err(|_|
            ConfigError::InvalidOrigin(args.cors_origin.clone())
        )?;

        Ok(Self {
            server_addr: args.server_addr.clone(),
            cors_origin,
            llm,
            mealdb: MealDbConfig {
                base_url: mealdb_url,
                category_limit: args.category_limit,
            },
        })
    }
}

/// Resolves `endpoint` below `base`, keeping whatever path the base already
/// has: `https://host/api/json/v1/1` + `random.php` gives
/// `https://host/api/json/v1/1/random.php`.
pub fn endpoint_url(base: &Url, endpoint: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(endpoint)
}

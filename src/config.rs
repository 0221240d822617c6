use crate::auth::TokenKeys;
use crate::schemas::AppState;
use anyhow::Result;
use config::{Config, Environment, File};
use sea_orm::Database;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_JWT_SECRET: &str = "devconnect-development-secret";

/// Runtime configuration.
///
/// Sources, later ones winning: built-in defaults, an optional
/// `devconnect.toml` in the working directory, then environment variables
/// (`DATABASE_URL`, `BIND_ADDRESS`, `JWT_SECRET`, `TOKEN_TTL_SECS`,
/// `REQUEST_TIMEOUT_SECS`), including those from a `.env` file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .set_default("database_url", "sqlite://devconnect.db?mode=rwc")?
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("jwt_secret", DEFAULT_JWT_SECRET)?
            .set_default("token_ttl_secs", 360_000_i64)?
            .set_default("request_timeout_secs", 30_i64)?
            .add_source(File::with_name("devconnect").required(false))
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        if config.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("JWT_SECRET is not set, tokens are signed with the development secret");
        }
        debug!(
            "Configuration loaded: bind_address={}, token_ttl_secs={}, request_timeout_secs={}",
            config.bind_address, config.token_ttl_secs, config.request_timeout_secs
        );
        Ok(config)
    }

    /// Replaces the database URL and bind address with command-line values, if given.
    pub fn with_overrides(mut self, database_url: Option<String>, bind_address: Option<String>) -> Self {
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        self
    }
}

/// Connect to the database and build the shared handler state
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    info!("Connecting to database: {}", config.database_url);
    let db = Database::connect(&config.database_url).await?;

    Ok(AppState {
        db,
        tokens: TokenKeys::new(&config.jwt_secret, config.token_ttl_secs),
        request_timeout: Duration::from_secs(config.request_timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            database_url: "sqlite://devconnect.db?mode=rwc".to_string(),
            bind_address: "0.0.0.0:5000".to_string(),
            jwt_secret: "secret".to_string(),
            token_ttl_secs: 360_000,
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = sample().with_overrides(Some("sqlite::memory:".to_string()), None);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address, "0.0.0.0:5000");

        let config = sample().with_overrides(None, Some("127.0.0.1:8080".to_string()));
        assert_eq!(config.database_url, "sqlite://devconnect.db?mode=rwc");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_app_state_from_config() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            ..sample()
        };
        let state = initialize_app_state(&config).await.unwrap();
        assert_eq!(state.request_timeout, Duration::from_secs(30));
        let token = state.tokens.issue(3).unwrap();
        assert_eq!(state.tokens.verify(&token).unwrap(), 3);
    }
}

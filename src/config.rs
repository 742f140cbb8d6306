//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID for the Firestore database
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin allowed by CORS; the single-page front-end served elsewhere.
    pub client_url: String,
}

/// Where the client-session store finds its notification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .context("PORT must be a valid port number")?,
                client_url: env::var("CLIENT_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            remote: RemoteConfig {
                base_url: env::var("NOTIFICATION_API_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                timeout_secs: env::var("NOTIFICATION_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("NOTIFICATION_API_TIMEOUT_SECS must be a number of seconds")?,
            },
        })
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

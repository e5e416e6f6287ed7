// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct.
/// Load with Config::from_env() at application startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the breeds endpoint (listing + detail)
    pub breeds_api_url: String,

    /// Base URL of the reviews endpoint (fetch + submit)
    pub reviews_api_url: String,

    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or the process environment.
    /// Called once at application startup.
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            breeds_api_url: env::var("BREEDS_API_URL").unwrap_or_else(|_| String::new()),

            reviews_api_url: env::var("REVIEWS_API_URL").unwrap_or_else(|_| String::new()),

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: The crate works offline from sample data without the
    /// API URLs, so missing endpoints only warn.
    pub fn validate(&self) -> Result<(), String> {
        if self.http_timeout_secs == 0 {
            return Err("HTTP_TIMEOUT_SECS must be greater than zero".to_string());
        }

        if self.breeds_api_url.is_empty() {
            log::warn!("BREEDS_API_URL not configured - catalog reloads will not work");
        }
        if self.reviews_api_url.is_empty() {
            log::warn!("REVIEWS_API_URL not configured - review submission will not work");
        }

        Ok(())
    }
}

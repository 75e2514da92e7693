//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup.

use std::env;

/// Default base URL for the Discord REST API.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Hex-encoded Ed25519 public key used to verify inbound interactions
    pub public_key: String,

    /// Discord application identifier (used by the registration utility)
    pub app_id: String,

    /// Bot authentication token (used by the registration utility)
    pub bot_token: String,

    /// Base URL of the Discord REST API
    pub api_base: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            public_key: env::var("PUBLIC_KEY").unwrap_or_default(),

            app_id: env::var("APP_ID").unwrap_or_default(),

            bot_token: env::var("BOT_TOKEN").unwrap_or_default(),

            api_base: env::var("DISCORD_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_and_overrides() {
        env::remove_var("PORT");
        env::remove_var("DISCORD_API_BASE");
        let config = Config::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        env::set_var("PORT", "9000");
        env::set_var("DISCORD_API_BASE", "http://localhost:9999/api");
        let config = Config::from_env();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_base, "http://localhost:9999/api");
        env::remove_var("PORT");
        env::remove_var("DISCORD_API_BASE");
    }
}

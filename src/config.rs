//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API, without trailing slash
    pub api_url: String,
    /// Cache TTL in seconds; also the sweep period of the reaper
    pub cache_ttl: u64,
    /// Overall timeout for one HTTP request, in seconds
    pub http_timeout: u64,
    /// A catch succeeds when the roll is at or below this value
    pub catch_threshold: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Base endpoint (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 60)
    /// - `POKEDEX_CATCH_THRESHOLD` - Catch threshold (default: 50)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cache_ttl),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.http_timeout),
            catch_threshold: env::var("POKEDEX_CATCH_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.catch_threshold),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Request timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: 3600,
            http_timeout: 60,
            catch_threshold: 50,
        }
    }
}

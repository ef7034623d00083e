use std::{env, time::Duration};

use fleetwise_core::fleet::ProfileKind;

const DEFAULT_ASSISTANT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_ASSISTANT_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile generated at startup (default: ecommerce)
    pub default_profile: ProfileKind,
    /// Recommendations returned when no `limit` is given (default: 10)
    pub recommendation_limit: usize,
    /// Recommendations included in chat context (default: 5)
    pub chat_context_limit: usize,
    /// Seed for reproducible fleets; random when unset
    pub fleet_seed: Option<u64>,
    /// Chat-completions endpoint
    pub assistant_api_url: String,
    /// Bearer token for the completion API; chat always falls back without it
    pub assistant_api_key: Option<String>,
    /// Model name sent with each completion request (default: gpt-4o-mini)
    pub assistant_model: String,
    /// Outbound request timeout in seconds (default: 30)
    pub assistant_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEFAULT_PROFILE` - Startup profile (default: "ecommerce")
    /// - `RECOMMENDATION_LIMIT` - Default recommendation count (default: 10)
    /// - `CHAT_CONTEXT_LIMIT` - Recommendations sent as chat context (default: 5)
    /// - `FLEET_SEED` - Optional u64 seed for fleet generation
    /// - `ASSISTANT_API_URL` - Completion endpoint (default: OpenAI chat completions)
    /// - `ASSISTANT_API_KEY` - Optional API key
    /// - `ASSISTANT_MODEL` - Model name (default: "gpt-4o-mini")
    /// - `ASSISTANT_TIMEOUT_SECONDS` - Request timeout (default: 30)
    pub fn from_env() -> Self {
        Self {
            default_profile: env::var("DEFAULT_PROFILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| ProfileKind::parse(&v))
                .unwrap_or_default(),
            recommendation_limit: parse_var("RECOMMENDATION_LIMIT").unwrap_or(10),
            chat_context_limit: parse_var("CHAT_CONTEXT_LIMIT").unwrap_or(5),
            fleet_seed: parse_var("FLEET_SEED"),
            assistant_api_url: env::var("ASSISTANT_API_URL")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_API_URL.to_string()),
            assistant_api_key: env::var("ASSISTANT_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            assistant_model: env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_MODEL.to_string()),
            assistant_timeout_seconds: parse_var("ASSISTANT_TIMEOUT_SECONDS").unwrap_or(30),
        }
    }

    /// Get the assistant timeout as a Duration.
    pub fn assistant_timeout(&self) -> Duration {
        Duration::from_secs(self.assistant_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: ProfileKind::default(),
            recommendation_limit: 10,
            chat_context_limit: 5,
            fleet_seed: None,
            assistant_api_url: DEFAULT_ASSISTANT_API_URL.to_string(),
            assistant_api_key: None,
            assistant_model: DEFAULT_ASSISTANT_MODEL.to_string(),
            assistant_timeout_seconds: 30,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    parse_value(env::var(name).ok())
}

/// Parses a trimmed raw value; missing or unparseable values become `None`.
fn parse_value<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|v| v.trim().parse().ok())
}

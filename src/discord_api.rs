//! Authenticated client for the Discord user REST endpoint

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Raw user record as returned by `GET /users/{id}`.
///
/// Everything past `id` and `username` is optional on the wire; asset fields
/// are opaque hashes, colors are 24-bit integers.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub id: String,
    pub username: String,
    pub discriminator: Option<String>,
    pub global_name: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub banner_color: Option<u32>,
    pub accent_color: Option<u32>,
    pub bio: Option<String>,
    pub public_flags: Option<u32>,
    pub bot: Option<bool>,
    pub system: Option<bool>,
    pub mfa_enabled: Option<bool>,
    pub locale: Option<String>,
    pub premium_type: Option<u8>,
}

/// Errors from the upstream fetch. Upstream rejections keep the status code
/// so the proxy can propagate it verbatim.
#[derive(Debug, Error)]
pub enum DiscordApiError {
    #[error("Discord API error: {0}")]
    UpstreamStatus(u16),
    #[error("request to Discord API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid bot token: {0}")]
    InvalidToken(String),
}

/// Configuration for the Discord REST client
#[derive(Clone, Debug)]
pub struct DiscordApiConfig {
    /// Base URL of the versioned REST API
    pub base_url: String,
    /// Request timeout for the outbound call
    pub timeout: Duration,
}

impl Default for DiscordApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://discord.com/api/v10".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Seam between the proxy endpoint and the upstream profile source, so
/// handlers can be exercised against a stub.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch_profile(&self, user_id: &str) -> Result<RawProfile, DiscordApiError>;
}

/// Client for the Discord user endpoint, authenticated with a bot token.
#[derive(Clone)]
pub struct DiscordApiClient {
    client: Client,
    config: DiscordApiConfig,
}

impl DiscordApiClient {
    /// Create a new client holding the bot credential.
    pub fn new(config: DiscordApiConfig, bot_token: &str) -> Result<Self, DiscordApiError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bot {bot_token}"))
            .map_err(|e| DiscordApiError::InvalidToken(e.to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ProfileFetcher for DiscordApiClient {
    async fn fetch_profile(&self, user_id: &str) -> Result<RawProfile, DiscordApiError> {
        let url = format!("{}/users/{}", self.config.base_url, user_id);
        debug!("Fetching profile from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Discord API returned {} for user {}", status, user_id);
            return Err(DiscordApiError::UpstreamStatus(status.as_u16()));
        }

        let profile = response.json::<RawProfile>().await?;
        debug!("Fetched profile for {} ({})", profile.username, user_id);
        Ok(profile)
    }
}

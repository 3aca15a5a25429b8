use anyhow::{Context, Result};
use profile_proxy::{AppState, DiscordApiClient, DiscordApiConfig, ProfileFetcher};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

// HTML test page
static INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

const EXAMPLE_USER_ID: &str = "470573716711931905";

fn render_index_html() -> String {
    INDEX_TEMPLATE.replace("{example_user_id}", EXAMPLE_USER_ID)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,profile_proxy=debug"));
    fmt().with_env_filter(env_filter).with_target(true).init();

    // The bot token is optional at startup: without it the service still
    // serves health/status and answers profile requests with a 500.
    let bot_token = std::env::var("DISCORD_BOT_TOKEN").ok();

    let fetcher: Option<Arc<dyn ProfileFetcher>> = match &bot_token {
        Some(token) => {
            let client = DiscordApiClient::new(DiscordApiConfig::default(), token)
                .context("Failed to create Discord API client")?;
            info!("Discord API client configured");
            Some(Arc::new(client))
        }
        None => {
            warn!("DISCORD_BOT_TOKEN not set; profile requests will fail until configured");
            None
        }
    };

    let state = AppState { fetcher };
    let app = profile_proxy::router(state, render_index_html());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let addr: SocketAddr = bind_addr.parse()?;

    println!("\nDiscord profile proxy starting");
    println!("Listening on http://{addr}");
    println!("\nEndpoints:");
    println!("- GET /api/discord?userid=USER_ID");
    println!("- GET /api/health");
    println!("- GET /api/status");
    println!("\nTest page: http://{addr}/");

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Shutdown signal received, stopping server...");
    };

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Clean shutdown complete");

    Ok(())
}

//! Proxy endpoint handlers and router assembly

use crate::discord_api::{DiscordApiError, ProfileFetcher};
use crate::profile_normalizer::{normalize_profile, NormalizedProfile};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

/// Shared state injected into handlers. The fetcher is `None` when no bot
/// token was configured at startup; that state is reported per request and
/// by the status endpoint, never by crashing the process.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Option<Arc<dyn ProfileFetcher>>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub userid: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    success: bool,
    timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatusResponse {
    status: &'static str,
    configured: bool,
    message: &'static str,
    timestamp: String,
    success: bool,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `GET /api/discord?userid=..` — fetch, normalize, respond.
pub async fn profile_handler(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> Response {
    let user_id = match params.userid.filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(NormalizedProfile::failure("userid parameter is required")),
            )
                .into_response();
        }
    };

    let Some(fetcher) = &state.fetcher else {
        warn!("Rejecting profile request: bot token not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(NormalizedProfile::failure("Discord bot token not configured")),
        )
            .into_response();
    };

    match fetcher.fetch_profile(&user_id).await {
        Ok(raw) => {
            info!("Normalized profile for user {}", user_id);
            Json(normalize_profile(&raw, &user_id)).into_response()
        }
        Err(DiscordApiError::UpstreamStatus(code)) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                Json(NormalizedProfile::failure(format!(
                    "Discord API error: {code}"
                ))),
            )
                .into_response()
        }
        Err(e) => {
            warn!("Profile fetch for {} failed: {}", user_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(NormalizedProfile::failure("Request failed")),
            )
                .into_response()
        }
    }
}

/// `GET /api` — redirecting alias for the profile endpoint. Without a
/// `userid` it answers with a short index of the available endpoints.
pub async fn api_index_handler(Query(params): Query<ProfileQuery>) -> Response {
    if let Some(user_id) = params.userid.filter(|id| !id.is_empty()) {
        return Redirect::temporary(&format!("/api/discord?userid={user_id}")).into_response();
    }

    Json(serde_json::json!({
        "message": "Discord profile proxy - look up a user by numeric ID.",
        "endpoints": {
            "GET /api/discord?userid=USER_ID": "Fetch a normalized Discord user profile",
            "GET /api/health": "Liveness check",
            "GET /api/status": "Bot token configuration status",
        },
        "example_usage": "/api/discord?userid=470573716711931905",
        "success": true,
    }))
    .into_response()
}

/// `GET /api/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "API is running",
        success: true,
        timestamp: now_iso(),
    })
}

/// `GET /api/status` — reports only whether the credential is present.
pub async fn status_handler(State(state): State<AppState>) -> Json<ServiceStatusResponse> {
    let configured = state.fetcher.is_some();
    Json(ServiceStatusResponse {
        status: "API is running",
        configured,
        message: if configured {
            "Discord bot token is configured"
        } else {
            "Discord bot token is missing. Add DISCORD_BOT_TOKEN environment variable."
        },
        timestamp: now_iso(),
        success: true,
    })
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Assemble the full router: API routes, the HTML test page at `/`, and the
/// CORS layers. `CorsLayer` answers browser preflights and stamps
/// `Access-Control-Allow-Origin: *` on every response; the set-header layers
/// keep the remaining two contract headers present on non-preflight
/// responses as well.
pub fn router(state: AppState, index_html: String) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/",
            get(move || {
                let html = index_html.clone();
                async move { Html(html) }
            }),
        )
        .route("/api", get(api_index_handler).options(preflight))
        .route("/api/discord", get(profile_handler).options(preflight))
        .route("/api/health", get(health_handler).options(preflight))
        .route("/api/status", get(status_handler).options(preflight))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}

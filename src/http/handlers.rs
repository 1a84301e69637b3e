use super::state::AppState;
use crate::error::VoiceError;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::error;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    #[serde(rename = "roomName")]
    pub room_name: Option<String>,

    #[serde(rename = "participantName")]
    pub participant_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/token?roomName=<r>&participantName=<p>
/// Mint a join token scoped to one participant in one room
pub async fn issue_token(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> impl IntoResponse {
    let room_name = query.room_name.as_deref().unwrap_or("");
    let participant_name = query.participant_name.as_deref().unwrap_or("");

    match state.issuer.mint(room_name, participant_name) {
        Ok(token) => (StatusCode::OK, Json(TokenResponse { token })).into_response(),

        Err(e @ VoiceError::MissingParameter(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),

        Err(e @ VoiceError::MissingCredentials) => {
            // Operator error: the signing key pair is absent from the
            // environment. Not recoverable by the caller.
            error!("Token request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }

        Err(e) => {
            error!("Failed to generate token: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to generate token".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

//! HTTP API server for the voice-call client
//!
//! This module provides the server boundary of the system:
//! - GET /api/token - Mint a scoped LiveKit join token
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{ErrorResponse, TokenQuery, TokenResponse};
pub use routes::create_router;
pub use state::AppState;

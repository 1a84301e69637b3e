use crate::config::LiveKitConfig;
use crate::token::TokenIssuer;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Token issuer shared by all requests
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(config: LiveKitConfig) -> Self {
        Self {
            issuer: Arc::new(TokenIssuer::new(config)),
        }
    }
}

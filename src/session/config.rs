use serde::{Deserialize, Serialize};

/// Configuration for a call session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Client-visible LiveKit server URL. Empty means unconfigured; connect
    /// attempts fail before any provider handshake.
    pub server_url: String,

    /// Prefix for generated room identifiers
    pub room_prefix: String,

    /// Prefix for generated participant identifiers
    pub participant_prefix: String,
}

impl SessionConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Default::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            room_prefix: "room".to_string(),
            participant_prefix: "caller".to_string(),
        }
    }
}

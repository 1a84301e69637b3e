//! LiveKit join-token minting.
//!
//! Tokens are scoped to exactly one room with join/publish/subscribe/data
//! grants and a bounded TTL. The issuer is stateless: every call signs a
//! fresh token and nothing is cached or revocable here.

use crate::config::LiveKitConfig;
use crate::error::VoiceError;
use livekit_api::access_token::{AccessToken, VideoGrants};
use std::time::Duration;
use tracing::info;

pub struct TokenIssuer {
    config: LiveKitConfig,
}

impl TokenIssuer {
    pub fn new(config: LiveKitConfig) -> Self {
        Self { config }
    }

    /// Mint a join token for one participant in one room.
    ///
    /// Both names must be non-empty; `roomName` is validated first so its
    /// error wins when both are missing. Missing signing credentials are an
    /// operator error, not a caller error.
    pub fn mint(&self, room_name: &str, participant_name: &str) -> Result<String, VoiceError> {
        if room_name.trim().is_empty() {
            return Err(VoiceError::MissingParameter("roomName"));
        }
        if participant_name.trim().is_empty() {
            return Err(VoiceError::MissingParameter("participantName"));
        }
        if !self.config.has_credentials() {
            return Err(VoiceError::MissingCredentials);
        }

        let token = AccessToken::with_api_key(&self.config.api_key, &self.config.api_secret)
            .with_identity(participant_name)
            .with_name(participant_name)
            .with_grants(VideoGrants {
                room_join: true,
                room: room_name.to_string(),
                can_publish: true,
                can_subscribe: true,
                can_publish_data: true,
                ..Default::default()
            })
            .with_ttl(Duration::from_secs(self.config.token_ttl_secs));

        let jwt = token.to_jwt()?;

        info!(
            "Minted join token for {} in room {} (ttl {}s)",
            participant_name, room_name, self.config.token_ttl_secs
        );

        Ok(jwt)
    }
}

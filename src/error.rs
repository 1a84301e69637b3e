use thiserror::Error;

/// Errors raised by the token issuer and the call-session lifecycle.
///
/// The `Display` strings double as the client-facing messages returned by the
/// HTTP layer, so the wording here is part of the API contract.
#[derive(Error, Debug)]
pub enum VoiceError {
    /// A required request parameter was absent or empty.
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    /// The LiveKit signing key pair is not present in the running environment.
    #[error("Server configuration error: Missing LiveKit credentials")]
    MissingCredentials,

    /// Token construction or signing failed.
    #[error("Failed to generate token: {0}")]
    TokenSigning(#[from] livekit_api::access_token::AccessTokenError),

    /// No LiveKit server URL is configured on the client side.
    #[error("LiveKit server URL is not configured")]
    MissingServerUrl,

    /// Token retrieval succeeded but the realtime handshake did not.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

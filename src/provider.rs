//! Realtime provider abstraction.
//!
//! The media platform (LiveKit or compatible) is an external collaborator;
//! the session layer consumes it through this trait and depends on nothing
//! beyond the events defined here.

use anyhow::Result;
use tokio::sync::mpsc;

/// Identity attached to a transcription segment by the provider.
#[derive(Debug, Clone)]
pub struct ParticipantInfo {
    pub identity: String,
    pub name: String,
}

/// A provider-emitted unit of speech-to-text output.
///
/// Non-final segments are interim results and may be revised; final segments
/// are committed. The participant may be absent on provider-generated events.
#[derive(Debug, Clone)]
pub struct TranscriptionSegment {
    pub text: String,
    pub is_final: bool,
    pub participant: Option<ParticipantInfo>,
}

/// Push events delivered by an active realtime session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The session handshake completed on the provider side.
    Connected,
    /// The provider ended the session (network loss, remote close).
    Disconnected,
    /// The voice assistant's activity signal changed (e.g. "listening",
    /// "thinking", "speaking").
    AgentStateChanged(String),
    /// A batch of transcription segments, in utterance order.
    Transcription(Vec<TranscriptionSegment>),
}

/// Realtime session backend trait
///
/// Implementations wrap a concrete media SDK (e.g. a LiveKit room client).
/// `start` performs the handshake and hands back the event stream; events are
/// delivered in arrival order on a single channel.
#[async_trait::async_trait]
pub trait RealtimeProvider: Send + Sync {
    /// Open a session against `server_url` using a pre-minted join token.
    ///
    /// Returns a channel receiver that will receive session events until the
    /// session ends.
    async fn start(&mut self, server_url: &str, token: &str)
        -> Result<mpsc::Receiver<SessionEvent>>;

    /// Tear the session down. Idempotent; closes the event channel.
    async fn stop(&mut self) -> Result<()>;

    /// Check if a session is currently open
    fn is_connected(&self) -> bool;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

use super::config::SessionConfig;
use super::presence::PresenceState;
use super::transcript::{ConversationEntry, TranscriptLog};
use crate::error::VoiceError;
use crate::provider::{RealtimeProvider, SessionEvent};
use crate::token::TokenIssuer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Connection lifecycle state of a call session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

/// The active session's endpoint and join token.
///
/// Present exactly while the session is connected; cleared on every exit
/// path, so a failed connect never leaves a stored token behind.
#[derive(Debug, Clone)]
pub struct SessionDescriptor {
    pub server_url: String,
    pub token: String,
}

/// A call session that manages token retrieval, the realtime connection,
/// transcript aggregation, and presence tracking
pub struct CallSession {
    /// Session configuration
    config: SessionConfig,

    /// Token issuer for join tokens
    issuer: Arc<TokenIssuer>,

    /// Realtime provider backend
    provider: Arc<Mutex<Box<dyn RealtimeProvider>>>,

    /// Current lifecycle state
    state: Arc<Mutex<ConnectionState>>,

    /// Endpoint/token pair for the active connection
    descriptor: Arc<Mutex<Option<SessionDescriptor>>>,

    /// Conversation log built from finalized transcription segments
    transcript: Arc<Mutex<TranscriptLog>>,

    /// Current assistant presence state
    presence: Arc<Mutex<PresenceState>>,

    /// Whether the session is live; gates the event task
    is_live: Arc<AtomicBool>,

    /// Handle for the event-consuming task
    event_task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl CallSession {
    /// Create a new call session around a provider backend
    pub fn new(
        config: SessionConfig,
        issuer: Arc<TokenIssuer>,
        provider: Box<dyn RealtimeProvider>,
    ) -> Self {
        Self {
            config,
            issuer,
            provider: Arc::new(Mutex::new(provider)),
            state: Arc::new(Mutex::new(ConnectionState::Disconnected)),
            descriptor: Arc::new(Mutex::new(None)),
            transcript: Arc::new(Mutex::new(TranscriptLog::new())),
            presence: Arc::new(Mutex::new(PresenceState::Idle)),
            is_live: Arc::new(AtomicBool::new(false)),
            event_task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a call: mint a token for freshly generated room/participant
    /// identifiers, open the realtime session, and begin consuming events.
    ///
    /// Any failure unwinds the attempt completely back to `Disconnected` and
    /// is returned for the caller to surface; nothing is swallowed here.
    pub async fn connect(&self) -> Result<(), VoiceError> {
        {
            let mut state = self.state.lock().await;
            if *state != ConnectionState::Disconnected {
                warn!("Connect requested while session is {:?}", *state);
                return Ok(());
            }
            *state = ConnectionState::Connecting;
        }

        // Collisions across calls are accepted as negligible
        let room_name = format!("{}-{}", self.config.room_prefix, Uuid::new_v4());
        let participant_name = format!("{}-{}", self.config.participant_prefix, Uuid::new_v4());

        info!(
            "Starting call: room={}, participant={}",
            room_name, participant_name
        );

        let result = self.try_connect(&room_name, &participant_name).await;

        if let Err(e) = &result {
            error!("Call setup failed: {}", e);
            Self::reset_state(
                &self.state,
                &self.descriptor,
                &self.transcript,
                &self.presence,
                &self.is_live,
            )
            .await;
        }

        result
    }

    async fn try_connect(
        &self,
        room_name: &str,
        participant_name: &str,
    ) -> Result<(), VoiceError> {
        let token = self.issuer.mint(room_name, participant_name)?;

        let server_url = self.config.server_url.trim();
        if server_url.is_empty() {
            return Err(VoiceError::MissingServerUrl);
        }

        let mut events = {
            let mut provider = self.provider.lock().await;
            provider
                .start(server_url, &token)
                .await
                .map_err(|e| VoiceError::ConnectionFailed(e.to_string()))?
        };

        // The handshake succeeded; the session is live from here on
        {
            let mut descriptor = self.descriptor.lock().await;
            *descriptor = Some(SessionDescriptor {
                server_url: server_url.to_string(),
                token,
            });
        }
        self.is_live.store(true, Ordering::SeqCst);
        {
            let mut state = self.state.lock().await;
            *state = ConnectionState::Connected;
        }

        info!("Call connected to {}", server_url);

        // Spawn the event task: the single consumer of provider events for
        // this session. It must not block between receiving a batch and
        // appending it, so log order matches arrival order.
        let state = Arc::clone(&self.state);
        let descriptor = Arc::clone(&self.descriptor);
        let transcript = Arc::clone(&self.transcript);
        let presence = Arc::clone(&self.presence);
        let is_live = Arc::clone(&self.is_live);
        let provider = Arc::clone(&self.provider);

        let event_task = tokio::spawn(async move {
            info!("Session event task started");

            while let Some(event) = events.recv().await {
                if !is_live.load(Ordering::SeqCst) {
                    break;
                }

                match event {
                    SessionEvent::Connected => {
                        info!("Realtime session established");
                    }
                    SessionEvent::Transcription(segments) => {
                        let mut log = transcript.lock().await;
                        log.ingest(&segments);
                    }
                    SessionEvent::AgentStateChanged(signal) => {
                        let mut current = presence.lock().await;
                        *current = PresenceState::from_signal(Some(&signal));
                    }
                    SessionEvent::Disconnected => {
                        info!("Provider ended the session");
                        Self::reset_state(&state, &descriptor, &transcript, &presence, &is_live)
                            .await;

                        let mut provider = provider.lock().await;
                        if let Err(e) = provider.stop().await {
                            error!("Failed to stop realtime provider: {}", e);
                        }
                        break;
                    }
                }
            }

            info!("Session event task stopped");
        });

        {
            let mut handle = self.event_task_handle.lock().await;
            *handle = Some(event_task);
        }

        Ok(())
    }

    /// End the call and release every resource the session holds.
    ///
    /// Safe to call repeatedly, and after a provider-originated disconnect:
    /// both triggers funnel through the same state reset.
    pub async fn disconnect(&self) {
        let was_active = {
            let state = self.state.lock().await;
            *state != ConnectionState::Disconnected
        };

        if was_active {
            info!("Ending call session");

            Self::reset_state(
                &self.state,
                &self.descriptor,
                &self.transcript,
                &self.presence,
                &self.is_live,
            )
            .await;

            let mut provider = self.provider.lock().await;
            if let Err(e) = provider.stop().await {
                error!("Failed to stop realtime provider: {}", e);
            }
        } else {
            warn!("Disconnect requested while already disconnected");
        }

        // Always reap the event task so no handler outlives the session
        {
            let mut handle = self.event_task_handle.lock().await;
            if let Some(task) = handle.take() {
                if let Err(e) = task.await {
                    error!("Session event task panicked: {}", e);
                }
            }
        }
    }

    /// Single cleanup path for user disconnect, failed connect attempts, and
    /// provider-originated disconnects.
    async fn reset_state(
        state: &Arc<Mutex<ConnectionState>>,
        descriptor: &Arc<Mutex<Option<SessionDescriptor>>>,
        transcript: &Arc<Mutex<TranscriptLog>>,
        presence: &Arc<Mutex<PresenceState>>,
        is_live: &Arc<AtomicBool>,
    ) {
        is_live.store(false, Ordering::SeqCst);

        {
            let mut descriptor = descriptor.lock().await;
            *descriptor = None;
        }
        {
            let mut log = transcript.lock().await;
            log.clear();
        }
        {
            let mut current = presence.lock().await;
            *current = PresenceState::Idle;
        }
        {
            let mut state = state.lock().await;
            *state = ConnectionState::Disconnected;
        }
    }

    /// Current lifecycle state
    pub async fn state(&self) -> ConnectionState {
        *self.state.lock().await
    }

    /// The active endpoint/token pair, if connected
    pub async fn descriptor(&self) -> Option<SessionDescriptor> {
        self.descriptor.lock().await.clone()
    }

    /// Snapshot of the conversation log
    pub async fn conversation(&self) -> Vec<ConversationEntry> {
        self.transcript.lock().await.entries().to_vec()
    }

    /// The current interim caption, if any
    pub async fn live_caption(&self) -> Option<String> {
        self.transcript
            .lock()
            .await
            .live_caption()
            .map(str::to_string)
    }

    /// Current assistant presence state
    pub async fn presence(&self) -> PresenceState {
        *self.presence.lock().await
    }
}

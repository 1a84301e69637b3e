//! Call-session management
//!
//! This module provides the `CallSession` abstraction that manages:
//! - Join-token retrieval and room/participant identity generation
//! - The realtime connection lifecycle (disconnected/connecting/connected)
//! - Transcript aggregation from the provider's segment stream
//! - Assistant presence tracking
//! - Teardown and state reset on every exit path

mod config;
mod presence;
mod session;
mod transcript;

pub use config::SessionConfig;
pub use presence::PresenceState;
pub use session::{CallSession, ConnectionState, SessionDescriptor};
pub use transcript::{ConversationEntry, Role, TranscriptLog};

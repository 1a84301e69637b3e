pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod session;
pub mod token;

pub use config::{Config, LiveKitConfig};
pub use error::VoiceError;
pub use http::{create_router, AppState};
pub use provider::{ParticipantInfo, RealtimeProvider, SessionEvent, TranscriptionSegment};
pub use session::{
    CallSession, ConnectionState, ConversationEntry, PresenceState, Role, SessionConfig,
    SessionDescriptor, TranscriptLog,
};
pub use token::TokenIssuer;

use serde::{Deserialize, Serialize};

/// Display state derived from the assistant's activity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    #[default]
    Idle,
    Listening,
    Thinking,
    Speaking,
}

impl PresenceState {
    /// Map the provider's activity signal 1:1; anything unrecognized or
    /// absent (including the agent's "initializing" phase) is `Idle`.
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("listening") => PresenceState::Listening,
            Some("thinking") => PresenceState::Thinking,
            Some("speaking") => PresenceState::Speaking,
            _ => PresenceState::Idle,
        }
    }
}

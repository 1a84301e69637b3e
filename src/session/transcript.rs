use crate::provider::{ParticipantInfo, TranscriptionSegment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who said a finalized utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Classify a segment's speaker from its participant metadata.
    ///
    /// A segment with no participant attached is treated as assistant speech:
    /// the agent does not always tag itself on protocol-level fields.
    /// Otherwise the identity and display name are checked against the agent
    /// naming convention.
    pub fn classify(participant: Option<&ParticipantInfo>) -> Self {
        match participant {
            None => Role::Assistant,
            Some(p) => {
                if p.identity.to_lowercase().contains("agent")
                    || p.name.to_lowercase().contains("agent")
                {
                    Role::Assistant
                } else {
                    Role::User
                }
            }
        }
    }
}

/// A finalized utterance in the conversation log. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
    /// Wall-clock time at processing, not at utterance.
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation log built from the provider's transcription
/// stream, plus the current interim caption.
#[derive(Debug, Default)]
pub struct TranscriptLog {
    entries: Vec<ConversationEntry>,
    live_caption: Option<String>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of segments into the log, in arrival order.
    ///
    /// Segments that are empty after trimming are dropped. Non-final segments
    /// only replace the live caption and never touch the log, so interim
    /// revisions cannot duplicate or mutate history. Each retained final
    /// segment becomes exactly one new entry; adjacent entries from the same
    /// speaker are not coalesced.
    pub fn ingest(&mut self, segments: &[TranscriptionSegment]) {
        for segment in segments {
            let text = segment.text.trim();
            if text.is_empty() {
                continue;
            }

            if !segment.is_final {
                self.live_caption = Some(text.to_string());
                continue;
            }

            self.entries.push(ConversationEntry {
                role: Role::classify(segment.participant.as_ref()),
                content: text.to_string(),
                timestamp: Utc::now(),
            });
            self.live_caption = None;
        }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    /// The most recent interim result, if any.
    pub fn live_caption(&self) -> Option<&str> {
        self.live_caption.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard all entries and the live caption. A fresh session starts with
    /// an empty log.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.live_caption = None;
    }
}

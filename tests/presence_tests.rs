// Unit tests for the presence mapping: provider activity signal -> display
// state, defaulting to idle for anything unrecognized.

use pitwall_voice::PresenceState;

#[test]
fn test_known_signals_map_one_to_one() {
    assert_eq!(
        PresenceState::from_signal(Some("listening")),
        PresenceState::Listening
    );
    assert_eq!(
        PresenceState::from_signal(Some("thinking")),
        PresenceState::Thinking
    );
    assert_eq!(
        PresenceState::from_signal(Some("speaking")),
        PresenceState::Speaking
    );
}

#[test]
fn test_absent_signal_defaults_to_idle() {
    assert_eq!(PresenceState::from_signal(None), PresenceState::Idle);
}

#[test]
fn test_unrecognized_signals_default_to_idle() {
    assert_eq!(
        PresenceState::from_signal(Some("initializing")),
        PresenceState::Idle
    );
    assert_eq!(
        PresenceState::from_signal(Some("SPEAKING")),
        PresenceState::Idle
    );
    assert_eq!(PresenceState::from_signal(Some("")), PresenceState::Idle);
}

#[test]
fn test_default_is_idle() {
    assert_eq!(PresenceState::default(), PresenceState::Idle);
}

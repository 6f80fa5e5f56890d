use super::*;
use uuid::Uuid;

// =============================================================================
// SessionEventKind wire casing
// =============================================================================

#[test]
fn event_kind_serializes_to_provider_strings() {
    let encoded = serde_json::to_value(SessionEventKind::SignedIn).expect("encode");
    assert_eq!(encoded, "SIGNED_IN");
    let encoded = serde_json::to_value(SessionEventKind::TokenRefreshed).expect("encode");
    assert_eq!(encoded, "TOKEN_REFRESHED");
}

#[test]
fn event_kind_parses_provider_strings() {
    let kind: SessionEventKind = serde_json::from_value("SIGNED_OUT".into()).expect("kind");
    assert_eq!(kind, SessionEventKind::SignedOut);
    let kind: SessionEventKind = serde_json::from_value("PASSWORD_RECOVERY".into()).expect("kind");
    assert_eq!(kind, SessionEventKind::PasswordRecovery);
}

#[test]
fn unknown_kind_strings_parse_as_unknown() {
    let kind: SessionEventKind = serde_json::from_value("MFA_CHALLENGE_VERIFIED".into()).expect("kind");
    assert_eq!(kind, SessionEventKind::Unknown);
}

// =============================================================================
// SessionEvent::identity
// =============================================================================

#[test]
fn identity_of_event_with_user() {
    let id = Uuid::new_v4();
    let event = SessionEvent {
        kind: SessionEventKind::SignedIn,
        session: Some(Session { user: Some(Identity::new(id)), expires_at: Some(1_755_000_000) }),
    };
    assert_eq!(event.identity().map(|u| u.id), Some(id));
}

#[test]
fn identity_of_event_without_session() {
    let event = SessionEvent { kind: SessionEventKind::SignedOut, session: None };
    assert!(event.identity().is_none());
}

#[test]
fn identity_of_session_without_user() {
    let event = SessionEvent {
        kind: SessionEventKind::TokenRefreshed,
        session: Some(Session { user: None, expires_at: None }),
    };
    assert!(event.identity().is_none());
}

// =============================================================================
// SessionEvent serde
// =============================================================================

#[test]
fn event_deserializes_without_session_field() {
    let event: SessionEvent =
        serde_json::from_value(serde_json::json!({ "kind": "SIGNED_OUT" })).expect("event");
    assert_eq!(event.kind, SessionEventKind::SignedOut);
    assert!(event.session.is_none());
}

#[test]
fn event_deserializes_full_payload() {
    let event: SessionEvent = serde_json::from_value(serde_json::json!({
        "kind": "SIGNED_IN",
        "session": {
            "user": { "id": "8f2b5c51-9d7e-4a6f-8f10-3c2c7a1f9b42", "email": "ada@example.com" },
            "expires_at": 1_755_000_000
        }
    }))
    .expect("event");
    assert_eq!(event.identity().and_then(|u| u.email.as_deref()), Some("ada@example.com"));
}

// =============================================================================
// ProviderError
// =============================================================================

#[test]
fn registration_error_display_names_reason() {
    let err = ProviderError::Registration { reason: "listener table full".to_owned() };
    assert_eq!(err.to_string(), "session-change registration failed: listener table full");
}

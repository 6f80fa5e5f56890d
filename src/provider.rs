//! Session-provider seam — provider-neutral session types and the trait
//! the observable consumes.
//!
//! DESIGN
//! ======
//! The auth SDK behind this seam is a black box: the observable needs
//! exactly two capabilities from it, a synchronous read of the current
//! session and a one-shot registration of a change handler. Everything
//! else (token storage, refresh, transport) stays on the provider side.
//!
//! Event kind strings follow the provider's wire casing (`"SIGNED_IN"`)
//! so payloads can be deserialized straight off the SDK callback.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while wiring up a session provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider rejected the session-change handler registration.
    #[error("session-change registration failed: {reason}")]
    Registration { reason: String },
}

// =============================================================================
// SESSION TYPES
// =============================================================================

/// An active authentication context held by the provider.
///
/// A session may exist without a user (the provider is mid-refresh or the
/// payload is malformed); consumers of this crate treat that the same as
/// no session at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in principal, when the session carries one.
    #[serde(default)]
    pub user: Option<Identity>,
    /// Seconds since the Unix epoch at which the session expires, if known.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Session-state transition kinds, matching the provider's wire strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEventKind {
    /// A user completed sign-in.
    SignedIn,
    /// The active session ended.
    SignedOut,
    /// The session's access token was refreshed.
    TokenRefreshed,
    /// The signed-in user's profile changed.
    UserUpdated,
    /// A password-recovery flow was entered.
    PasswordRecovery,
    /// A kind this crate does not know; treated by payload shape alone.
    #[serde(other)]
    Unknown,
}

/// A single session-change notification delivered by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// What kind of transition occurred.
    pub kind: SessionEventKind,
    /// The session after the transition, absent on sign-out.
    #[serde(default)]
    pub session: Option<Session>,
}

impl SessionEvent {
    /// The identity carried by this event, if any.
    ///
    /// Any shape lacking a user (no session, or a session without one)
    /// yields `None`; the event kind is deliberately not consulted, so a
    /// malformed payload degrades to signed-out rather than an error.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Callback invoked by the provider on every session transition.
pub type SessionHandler = Box<dyn Fn(&SessionEvent) + Send + Sync>;

/// The two operations an auth SDK must expose to back an
/// [`IdentityObservable`](crate::observable::IdentityObservable).
pub trait SessionProvider {
    /// Read the current session without blocking.
    fn current_session(&self) -> Option<Session>;

    /// Register a handler to be invoked on every future session
    /// transition, in delivery order, for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Registration`] if the provider cannot
    /// accept the handler; callers cannot observe transitions after that.
    fn on_session_change(&self, handler: SessionHandler) -> Result<(), ProviderError>;
}

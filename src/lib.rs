//! Reactive current-user store backed by an external auth provider.
//!
//! DESIGN
//! ======
//! The crate has one job: hold the latest known signed-in identity and
//! republish it to observers as the provider reports session transitions.
//! [`SessionProvider`] is the seam to the auth SDK (read current session,
//! register a change handler); [`IdentityObservable`] is the store itself,
//! with replay-latest-on-subscribe semantics. Signed-out is `None` — a
//! session without a user collapses to the same state as no session.
//!
//! Authentication, token storage/refresh, and transport all live behind
//! the provider; errors surface here only when handler registration fails.

pub mod identity;
pub mod observable;
pub mod provider;

pub use identity::Identity;
pub use observable::{IdentityObservable, ObserverHandle};
pub use provider::{
    ProviderError, Session, SessionEvent, SessionEventKind, SessionHandler, SessionProvider,
};

//! Read-only observable view of the currently signed-in identity.
//!
//! ARCHITECTURE
//! ============
//! One `IdentityObservable` per application context, constructed against a
//! [`SessionProvider`] and passed (or cloned) into whatever needs to react
//! to sign-in state. The provider is consulted twice, both at construction:
//! once for the initial session and once to register the change handler.
//! After that the observable only ever reacts to provider callbacks.
//!
//! TRADE-OFFS
//! ==========
//! There is deliberately no getter: `subscribe` replays the latest value
//! synchronously, so a read is just a subscription you cancel immediately,
//! and every consumer is forced through the same reactive path.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use crate::identity::Identity;
use crate::provider::{ProviderError, SessionEvent, SessionProvider};

/// Observer callback; receives the current identity, `None` when signed out.
type ObserverFn = Arc<dyn Fn(Option<&Identity>) + Send + Sync>;

/// Registered observers in subscription order, keyed for removal.
struct ObserverList {
    next_id: u64,
    entries: Vec<(u64, ObserverFn)>,
}

struct Inner {
    /// Latest identity derived from the provider. Replaced wholesale on
    /// every event, so observers never see a partially built value.
    current: Mutex<Option<Identity>>,
    observers: Mutex<ObserverList>,
}

impl Inner {
    /// Apply one provider event: store the derived identity, then notify
    /// every registered observer in subscription order before returning.
    fn apply(&self, event: &SessionEvent) {
        let next = event.identity().cloned();
        tracing::debug!(kind = ?event.kind, signed_in = next.is_some(), "session transition");

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = next.clone();

        // Snapshot under the lock, invoke outside it, so an observer may
        // subscribe or unsubscribe from within its own notification.
        let snapshot: Vec<ObserverFn> = {
            let list = self.observers.lock().unwrap_or_else(PoisonError::into_inner);
            list.entries.iter().map(|(_, f)| Arc::clone(f)).collect()
        };
        for observer in &snapshot {
            observer(next.as_ref());
        }
    }
}

/// A read-only, always-current view of the signed-in identity.
///
/// Clones share state: subscribing through any clone registers against the
/// same underlying value and event stream.
#[derive(Clone)]
pub struct IdentityObservable {
    inner: Arc<Inner>,
}

impl IdentityObservable {
    /// Construct against a provider: read the current session once, then
    /// register the internal session-change handler.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider rejects the handler
    /// registration; without it the observable could never update.
    pub fn new(provider: &impl SessionProvider) -> Result<Self, ProviderError> {
        let initial = provider.current_session().and_then(|s| s.user);
        tracing::debug!(signed_in = initial.is_some(), "identity observable initialized");

        let inner = Arc::new(Inner {
            current: Mutex::new(initial),
            observers: Mutex::new(ObserverList { next_id: 0, entries: Vec::new() }),
        });

        let handler = Arc::clone(&inner);
        provider.on_session_change(Box::new(move |event: &SessionEvent| handler.apply(event)))?;

        Ok(Self { inner })
    }

    /// Register an observer and immediately replay the current value to it.
    ///
    /// Observers are notified in subscription order on every subsequent
    /// provider event, with no equality-coalescing. The returned handle
    /// cancels only this observer; dropping it without calling
    /// [`ObserverHandle::unsubscribe`] leaves the observer registered.
    pub fn subscribe(
        &self,
        observer: impl Fn(Option<&Identity>) + Send + Sync + 'static,
    ) -> ObserverHandle {
        let observer: ObserverFn = Arc::new(observer);

        let id = {
            let mut list = self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
            let id = list.next_id;
            list.next_id += 1;
            list.entries.push((id, Arc::clone(&observer)));
            id
        };

        let current = self.inner.current.lock().unwrap_or_else(PoisonError::into_inner).clone();
        observer(current.as_ref());

        ObserverHandle { inner: Arc::downgrade(&self.inner), id }
    }
}

/// Cancellation handle returned by [`IdentityObservable::subscribe`].
#[derive(Debug)]
pub struct ObserverHandle {
    inner: Weak<Inner>,
    id: u64,
}

impl ObserverHandle {
    /// Remove the associated observer; it receives no further
    /// notifications. Idempotent, and a no-op once the observable itself
    /// has been dropped.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut list = inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
            list.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

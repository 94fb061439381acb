//! In-process identity provider.
//!
//! Used on the server render path, where no browser adapter exists, and to
//! drive auth transitions deterministically in tests.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{Identity, IdentityError, IdentityListener, IdentityProvider, ListenerId};

type SharedListener = Arc<dyn Fn(Option<Identity>) + Send + Sync>;

#[derive(Default)]
struct MemoryInner {
    next_id: u64,
    listeners: Vec<(ListenerId, SharedListener)>,
    current: Option<Identity>,
    sign_out_failure: Option<String>,
    sign_out_calls: usize,
}

/// Identity provider whose transitions are driven by [`MemoryIdentityProvider::emit`].
#[derive(Clone, Default)]
pub struct MemoryIdentityProvider {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryIdentityProvider {
    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `identity` as current and notify every listener.
    pub fn emit(&self, identity: Option<Identity>) {
        let listeners: Vec<SharedListener> = {
            let mut inner = self.lock();
            inner.current.clone_from(&identity);
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(identity.clone());
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.lock().current.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.lock().sign_out_calls
    }

    /// Make the next `sign_out` call fail with `message`.
    pub fn fail_next_sign_out(&self, message: impl Into<String>) {
        self.lock().sign_out_failure = Some(message.into());
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MemoryIdentityProvider {
    fn subscribe(&self, listener: IdentityListener) -> ListenerId {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = ListenerId(inner.next_id);
        inner.listeners.push((id, Arc::from(listener)));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let was_signed_in = {
            let mut inner = self.lock();
            inner.sign_out_calls += 1;
            if let Some(message) = inner.sign_out_failure.take() {
                return Err(IdentityError::SignOut(message));
            }
            inner.current.is_some()
        };
        // Real providers report the transition to listeners after signing out.
        if was_signed_in {
            self.emit(None);
        }
        Ok(())
    }
}

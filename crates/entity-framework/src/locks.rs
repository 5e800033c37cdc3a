//! # Per-Entity Lock Table
//!
//! [`EntityLocks`] hands out a mutual-exclusion scope per entity identifier. Operations on the
//! same key run one at a time in lock acquisition order (tokio mutexes are fair), while
//! operations on different keys never wait on each other.
//!
//! ## Token lifecycle
//!
//! Tokens are created on first use and live in a sharded map. Every guard and every queued
//! waiter holds a reference-counted handle on its token, so the table can tell whether anyone
//! besides the current holder still needs it:
//!
//! 1. The holder calls [`EntityGuard::release`] once the entity is gone.
//! 2. When that guard drops, the token is removed from the table **only** if no other guard or
//!    waiter holds it.
//! 3. A waiter that was already queued keeps using the same token. The released flag lives
//!    inside the token, so the last holder out removes it.
//!
//! A key can therefore never be guarded by two different tokens at the same time. Re-locking
//! a key after its token was removed creates a fresh one.

use dashmap::DashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

#[derive(Debug, Default)]
struct TokenState {
    released: bool,
}

type Token = Arc<Mutex<TokenState>>;

/// A table of per-key mutual-exclusion tokens.
pub struct EntityLocks<K> {
    name: &'static str,
    tokens: DashMap<K, Token>,
}

impl<K> EntityLocks<K>
where
    K: Eq + Hash + Clone + Display + Debug + Send + Sync,
{
    /// Creates an empty table. `name` only shows up in trace logs (e.g. `"order"`).
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            tokens: DashMap::new(),
        }
    }

    /// Waits until the caller holds `key` exclusively.
    ///
    /// The token is fetched or created under the map's shard lock, so two callers racing on a
    /// fresh key always end up on the same token.
    pub async fn lock(&self, key: &K) -> EntityGuard<'_, K> {
        let token = self
            .tokens
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(TokenState::default())))
            .value()
            .clone();

        let guard = Arc::clone(&token).lock_owned().await;
        trace!(lock = self.name, %key, "Acquired");

        EntityGuard {
            locks: self,
            key: key.clone(),
            token,
            guard: Some(guard),
        }
    }

    /// Runs `action` while holding `key` and returns whatever it returns.
    ///
    /// Waiting for the lock is the only suspension point: `action` runs to completion without
    /// yielding, so a caller dropped mid-way never leaves the entity half-updated. It gets the
    /// guard to [`release`](EntityGuard::release) the token when the entity turns out to be
    /// gone.
    pub async fn with_lock<'a, F, R>(&'a self, key: &K, action: F) -> R
    where
        F: FnOnce(&mut EntityGuard<'a, K>) -> R,
    {
        let mut guard = self.lock(key).await;
        action(&mut guard)
    }

    /// Number of tokens currently in the table.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Exclusive access to one key of an [`EntityLocks`] table. Dropping it unlocks the key.
pub struct EntityGuard<'a, K>
where
    K: Eq + Hash,
{
    locks: &'a EntityLocks<K>,
    key: K,
    token: Token,
    guard: Option<OwnedMutexGuard<TokenState>>,
}

impl<K> EntityGuard<'_, K>
where
    K: Eq + Hash,
{
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Marks the token for removal: the entity it guards no longer exists.
    ///
    /// The token leaves the table when this guard drops, or when the last waiter queued behind
    /// it drops its own guard.
    pub fn release(&mut self) {
        if let Some(state) = self.guard.as_mut() {
            state.released = true;
        }
    }
}

impl<K> Drop for EntityGuard<'_, K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        // Unlock first so the strong count below only sees the table, this guard's handle and
        // any waiters.
        let released = self
            .guard
            .take()
            .map(|state| state.released)
            .unwrap_or(false);

        if released {
            let token = &self.token;
            self.locks.tokens.remove_if(&self.key, |_, stored| {
                Arc::ptr_eq(stored, token) && Arc::strong_count(stored) == 2
            });
        }
    }
}

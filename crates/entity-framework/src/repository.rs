//! # In-Memory Repository
//!
//! Key-indexed storage for [`Entity`] values. The store is volatile and lives as long as the
//! process does.
//!
//! The repository carries no business logic and takes no entity locks. It is safe to share
//! between tasks, but offers no transaction spanning several keys. Callers that need a
//! read-modify-write on one entity hold that entity's [`EntityGuard`](crate::locks::EntityGuard)
//! around it.

use crate::entity::Entity;
use dashmap::DashMap;

/// Storage contract shared by all resource repositories.
pub trait Repository<T: Entity>: Send + Sync {
    /// Inserts or overwrites the entry keyed by `item.id()`, returning the previous value.
    fn save(&self, item: T) -> Option<T>;

    /// Returns a copy of the value stored under `id`.
    fn find(&self, id: &T::Id) -> Option<T>;

    /// Returns a snapshot of every stored value. Iteration order is unspecified.
    fn find_all(&self) -> Vec<T>;

    /// Deletes and returns the value stored under `id`.
    fn remove(&self, id: &T::Id) -> Option<T>;

    /// Deletes every value in `items`.
    fn remove_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.remove(&item.id());
        }
    }
}

/// A [`Repository`] backed by a sharded concurrent map.
pub struct InMemoryRepository<T: Entity> {
    store: DashMap<T::Id, T>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns every stored value matching `predicate`.
    pub fn find_where<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.store
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn save(&self, item: T) -> Option<T> {
        self.store.insert(item.id(), item)
    }

    fn find(&self, id: &T::Id) -> Option<T> {
        self.store.get(id).map(|entry| entry.value().clone())
    }

    fn find_all(&self) -> Vec<T> {
        self.store
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn remove(&self, id: &T::Id) -> Option<T> {
        self.store.remove(id).map(|(_, item)| item)
    }
}

//! # Entity Trait
//!
//! The `Entity` trait is the contract every stored resource (orders, pancakes, ...) must satisfy
//! to be kept in a [`Repository`](crate::repository::Repository) and guarded by
//! [`EntityLocks`](crate::locks::EntityLocks).
//!
//! # Architecture Note
//! The repository and the lock table are written *once* against this trait and reused for
//! every resource type. The associated `Id` type keeps them apart at compile time: an
//! `OrderRepository` can't be asked for a `PancakeId`.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored resource must implement.
///
/// Entities are plain values. The repository hands out clones, so mutating an entity means
/// loading it, changing the local copy, and saving it back while holding its lock.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. a UUID newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// Returns the identifier the entity is stored under.
    fn id(&self) -> Self::Id;
}

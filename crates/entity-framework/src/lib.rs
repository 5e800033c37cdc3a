//! # Entity Framework
//!
//! This crate provides the foundational building blocks for in-process services that manage
//! many small, independently mutated entities. It pairs plain value **entities** kept in a
//! concurrent **repository** with a **per-entity lock table**, plus an **actor-backed journal**
//! for out-of-band event recording.
//!
//! ## Why per-entity locks?
//!
//! A single actor (or a single mutex) around the whole store serializes every request, even
//! when two requests touch unrelated entities. Here each entity identifier gets its own
//! mutual-exclusion token instead:
//!
//! - **Isolation**: operations on the same entity run one at a time, in arrival order
//! - **Parallelism**: operations on different entities never wait on each other
//! - **Bounded footprint**: tokens are reclaimed once their entity is deleted and nobody is
//!   still waiting on them
//!
//! The journal keeps the actor model where it fits best: a single sink that owns its state and
//! is fed fire-and-forget messages, so recording never blocks or fails the caller.
//!
//! ## Core Abstractions
//!
//! 1. **Entity Layer** ([`Entity`]) - Your domain values and their identifiers
//! 2. **Storage Layer** ([`Repository`], [`InMemoryRepository`]) - Key-indexed, concurrent, volatile
//! 3. **Concurrency Layer** ([`EntityLocks`], [`EntityGuard`]) - Per-key mutual exclusion
//! 4. **Journal Layer** ([`JournalActor`], [`JournalClient`]) - Append-only event sink
//!
//! ```rust
//! use entity_framework::{Entity, EntityLocks, InMemoryRepository, Repository};
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: u64 }
//!
//! impl Entity for Counter {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let repo = InMemoryRepository::new();
//!     let locks = EntityLocks::new("counter");
//!     repo.save(Counter { id: 1, value: 0 });
//!
//!     // Read-modify-write under the entity's lock
//!     let guard = locks.lock(&1).await;
//!     if let Some(mut counter) = repo.find(guard.key()) {
//!         counter.value += 1;
//!         repo.save(counter);
//!     }
//!     drop(guard);
//!
//!     assert_eq!(repo.find(&1).unwrap().value, 1);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a journal client backed by a channel the test owns, so
//! recorded events can be asserted without spawning the actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod locks;
pub mod message;
pub mod mock;
pub mod repository;
pub mod tracing;

// Re-export core types for convenience
pub use actor::JournalActor;
pub use client::JournalClient;
pub use entity::Entity;
pub use error::FrameworkError;
pub use locks::{EntityGuard, EntityLocks};
pub use message::{JournalRequest, Response};
pub use repository::{InMemoryRepository, Repository};

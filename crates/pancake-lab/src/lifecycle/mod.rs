//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and shuts down the kitchen.
//!
//! **Key Responsibilities:**
//! 1. **Journal startup** - Spawn the order journal actor in its own task
//! 2. **Dependency Injection** - Hand the service its repositories, validators and journal
//!    handle, instead of reaching for process-wide singletons
//! 3. **Graceful Shutdown** - Drop every journal handle, then await the actor
//!
//! ```rust
//! use pancake_lab::config::LabConfig;
//! use pancake_lab::lifecycle::PancakeLab;
//! use pancake_lab::model::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lab = PancakeLab::new(&LabConfig::default());
//!
//!     let order_id = lab.service.start_order(Address::new(1, 1))?;
//!     lab.service.add_pancake(order_id).await?;
//!     assert_eq!(lab.service.view_order(order_id)?, vec!["plain pancake".to_string()]);
//!
//!     lab.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - `PancakeLab::shutdown` consumes the service and the log,
//!    closing the sender side of the journal channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued events are
//!    written
//! 3. **Await completion** - A panicked journal task surfaces as
//!    [`FrameworkError::TaskFailed`](entity_framework::FrameworkError::TaskFailed)
//!
//! Clones of the service held elsewhere keep the journal alive; drop them before shutting down.

pub mod pancake_lab;

pub use pancake_lab::*;

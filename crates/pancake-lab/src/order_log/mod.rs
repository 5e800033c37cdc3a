//! # Order Log
//!
//! The kitchen's activity journal: one human-readable line per pancake added or removed and
//! per order cancelled or delivered.
//!
//! ## Structure
//!
//! - [`events`] - [`OrderEvent`], the typed event and its rendered line
//! - [`OrderLog`] - the handle the service records through
//! - [`new()`] - Factory function that creates the journal actor and its handle
//!
//! ## Usage
//!
//! ```rust
//! use pancake_lab::order_log;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, log) = order_log::new(64);
//!     tokio::spawn(actor.run());
//!
//!     assert!(log.entries().await.unwrap().is_empty());
//! }
//! ```
//!
//! Recording is best-effort. A full or stopped journal loses the event with a warning, and
//! the operation that produced it carries on.

pub mod events;

pub use events::*;

use entity_framework::{FrameworkError, JournalActor, JournalClient};
use tracing::{debug, warn};

/// Creates a new order journal actor and its handle.
pub fn new(buffer_size: usize) -> (JournalActor<OrderEvent>, OrderLog) {
    let (actor, client) = JournalActor::new(buffer_size);
    (actor, OrderLog::new(client))
}

/// Handle for recording [`OrderEvent`]s.
#[derive(Clone)]
pub struct OrderLog {
    inner: JournalClient<OrderEvent>,
}

impl OrderLog {
    pub fn new(inner: JournalClient<OrderEvent>) -> Self {
        Self { inner }
    }

    /// Queues `event` without waiting. Never fails the caller.
    pub fn record(&self, event: OrderEvent) {
        debug!(?event, "Recording");
        if let Err(e) = self.inner.record(event) {
            warn!(error = %e, "Order event dropped");
        }
    }

    /// Every line recorded so far, oldest first.
    pub async fn entries(&self) -> Result<Vec<String>, FrameworkError> {
        self.inner.entries().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Address, OrderId};
    use entity_framework::mock::{create_mock_journal, expect_record};

    fn cancelled() -> OrderEvent {
        OrderEvent::OrderCancelled {
            order_id: OrderId::new(),
            address: Address::new(1, 1),
            pancakes: 0,
        }
    }

    #[tokio::test]
    async fn test_record_forwards_event() {
        let (client, mut receiver) = create_mock_journal(4);
        let log = OrderLog::new(client);
        let event = cancelled();

        log.record(event.clone());

        assert_eq!(expect_record(&mut receiver).await, Some(event));
    }

    #[tokio::test]
    async fn test_record_survives_closed_journal() {
        let (client, receiver) = create_mock_journal(4);
        drop(receiver);
        let log = OrderLog::new(client);

        // Must not panic or block.
        log.record(cancelled());
        assert!(log.entries().await.is_err());
    }
}

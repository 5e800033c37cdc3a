//! # Mock Journal & Testing Guide
//!
//! Code that records into a [`JournalClient`] can be tested without spawning a
//! [`JournalActor`](crate::JournalActor). The mock client sends to a channel the test controls,
//! so the test can assert exactly which events were produced, and in which order.
//!
//! ## When to use the mock vs the real actor
//!
//! | Feature | Mock journal | Real actor |
//! |---------|--------------|------------|
//! | **Assertions** | Typed events | Rendered lines |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Failure injection** | Drop the receiver / tiny buffer | Hard |
//!
//! ```rust
//! use entity_framework::mock::{create_mock_journal, expect_record};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_journal::<String>(8);
//!     client.record("Batter mixed".to_string()).unwrap();
//!
//!     let event = expect_record(&mut receiver).await;
//!     assert_eq!(event.as_deref(), Some("Batter mixed"));
//! }
//! ```

use crate::client::JournalClient;
use crate::message::JournalRequest;
use tokio::sync::mpsc;

/// Creates a journal client and the receiver its messages arrive on.
pub fn create_mock_journal<E>(
    buffer_size: usize,
) -> (JournalClient<E>, mpsc::Receiver<JournalRequest<E>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (JournalClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Record request.
pub async fn expect_record<E>(receiver: &mut mpsc::Receiver<JournalRequest<E>>) -> Option<E> {
    match receiver.recv().await {
        Some(JournalRequest::Record { event }) => Some(event),
        _ => None,
    }
}

/// Returns every Record event already queued, without waiting for more.
pub fn drain_records<E>(receiver: &mut mpsc::Receiver<JournalRequest<E>>) -> Vec<E> {
    let mut events = Vec::new();
    while let Ok(msg) = receiver.try_recv() {
        if let JournalRequest::Record { event } = msg {
            events.push(event);
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameworkError;

    #[tokio::test]
    async fn test_records_arrive_in_order() {
        let (client, mut receiver) = create_mock_journal::<u32>(8);
        client.record(1).unwrap();
        client.record(2).unwrap();

        assert_eq!(expect_record(&mut receiver).await, Some(1));
        assert_eq!(drain_records(&mut receiver), vec![2]);
    }

    #[tokio::test]
    async fn test_full_mailbox_is_reported() {
        let (client, _receiver) = create_mock_journal::<u32>(1);
        client.record(1).unwrap();

        assert!(matches!(client.record(2), Err(FrameworkError::MailboxFull)));
    }

    #[tokio::test]
    async fn test_closed_mailbox_is_reported() {
        let (client, receiver) = create_mock_journal::<u32>(1);
        drop(receiver);

        assert!(matches!(client.record(1), Err(FrameworkError::ActorClosed)));
        assert!(matches!(client.entries().await, Err(FrameworkError::ActorClosed)));
    }
}

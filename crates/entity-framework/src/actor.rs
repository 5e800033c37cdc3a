//! # Journal Actor
//!
//! This module defines the `JournalActor`, an append-only event sink running in its own Tokio
//! task. It is the "Server" half of the journal: it owns the rendered entries and the receiver
//! end of the channel, and processes messages sequentially.

use crate::client::JournalClient;
use crate::message::JournalRequest;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// An append-only journal of human-readable event lines.
///
/// # Architecture Note
/// Because the actor owns `entries` exclusively inside its task, appends need no `Mutex`.
/// Producers talk to it through a cloneable [`JournalClient`] and never wait for the append
/// to happen. The journal is purely observational: it can't fail or slow down the code
/// that records into it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `JournalActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Record**: Hand clones of the client to whoever produces events.
///
/// ```rust
/// use entity_framework::JournalActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = JournalActor::<String>::new(16);
///     tokio::spawn(actor.run());
///
///     client.record("Oven preheated".to_string()).unwrap();
///     let entries = client.entries().await.unwrap();
///     assert_eq!(entries, vec!["Oven preheated".to_string()]);
/// }
/// ```
pub struct JournalActor<E> {
    receiver: mpsc::Receiver<JournalRequest<E>>,
    entries: Vec<String>,
    _event: PhantomData<fn() -> E>,
}

impl<E> JournalActor<E>
where
    E: Display + Debug + Send + 'static,
{
    /// Creates a new `JournalActor` and its associated `JournalClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When it is full, further records
    ///   are rejected by the client instead of waiting.
    pub fn new(buffer_size: usize) -> (Self, JournalClient<E>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
            _event: PhantomData,
        };
        (actor, JournalClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "OrderEvent" instead of "pancake_lab::order_log::OrderEvent")
        let event_type = std::any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(event_type, "Journal started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                JournalRequest::Record { event } => {
                    debug!(event_type, ?event, "Record");
                    self.entries.push(event.to_string());
                }
                JournalRequest::Entries { respond_to } => {
                    let _ = respond_to.send(Ok(self.entries.clone()));
                }
            }
        }

        info!(event_type, size = self.entries.len(), "Shutdown");
    }
}

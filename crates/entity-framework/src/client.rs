//! # Journal Client
//!
//! This module defines the client half of the journal.

use crate::error::FrameworkError;
use crate::message::JournalRequest;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

/// A cheap-to-clone handle for recording events into a [`JournalActor`](crate::JournalActor).
///
/// * **Non-blocking** – `record` never waits: a full mailbox is reported as
///   [`FrameworkError::MailboxFull`] and the event is dropped.
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
pub struct JournalClient<E> {
    sender: mpsc::Sender<JournalRequest<E>>,
}

impl<E> Clone for JournalClient<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<E> JournalClient<E> {
    pub fn new(sender: mpsc::Sender<JournalRequest<E>>) -> Self {
        Self { sender }
    }

    /// Queues `event` for the journal without waiting.
    pub fn record(&self, event: E) -> Result<(), FrameworkError> {
        self.sender
            .try_send(JournalRequest::Record { event })
            .map_err(|e| match e {
                TrySendError::Full(_) => FrameworkError::MailboxFull,
                TrySendError::Closed(_) => FrameworkError::ActorClosed,
            })
    }

    /// Returns every line recorded so far, in arrival order.
    pub async fn entries(&self) -> Result<Vec<String>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(JournalRequest::Entries { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

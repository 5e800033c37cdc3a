//! # Journal Messages
//!
//! This module defines the message types exchanged between a
//! [`JournalClient`](crate::client::JournalClient) and its
//! [`JournalActor`](crate::actor::JournalActor).

use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the journal actor.
///
/// `Record` is fire-and-forget: the sender never waits for the actor, so a slow or stopped
/// journal can't hold up the operation that produced the event. `Entries` is the only
/// request that gets an answer.
#[derive(Debug)]
pub enum JournalRequest<E> {
    Record { event: E },
    Entries { respond_to: Response<Vec<String>> },
}

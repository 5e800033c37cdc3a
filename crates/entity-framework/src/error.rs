//! # Framework Errors
//!
//! This module defines the common error types used throughout the framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! every actor and client built on it.

/// Errors that can occur within the framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor mailbox full")]
    MailboxFull,
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

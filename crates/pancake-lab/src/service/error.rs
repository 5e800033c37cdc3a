//! Error types for the pancake service.

use crate::model::{OrderId, OrderStatus, PancakeId};
use crate::validators::ValidationError;
use thiserror::Error;

/// Broad classification of a [`PancakeError`], for callers that only care about the kind of
/// failure (e.g. to pick a response code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced order or pancake does not exist.
    NotFound,
    /// The input was malformed.
    InvalidArgument,
    /// A content rule would be broken.
    InvalidState,
    /// The order is not in the status the operation requires.
    WrongStatus,
}

/// Errors that can occur during order lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PancakeError {
    #[error("Order with id: {0} not found")]
    OrderNotFound(OrderId),

    #[error("Pancake with id: {0} not found")]
    PancakeNotFound(PancakeId),

    /// The pancake exists, but under a different order.
    #[error("Pancake with id: {pancake_id} does not belong to order {order_id}")]
    PancakeNotInOrder {
        pancake_id: PancakeId,
        order_id: OrderId,
    },

    #[error("Order {order_id} was expected to be in status: {expected} but was in status: {actual}")]
    WrongStatus {
        order_id: OrderId,
        expected: OrderStatus,
        actual: OrderStatus,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PancakeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PancakeError::OrderNotFound(_) | PancakeError::PancakeNotFound(_) => ErrorKind::NotFound,
            PancakeError::PancakeNotInOrder { .. } => ErrorKind::InvalidArgument,
            PancakeError::WrongStatus { .. } => ErrorKind::WrongStatus,
            PancakeError::Validation(ValidationError::TooManyIngredients { .. }) => {
                ErrorKind::InvalidState
            }
            PancakeError::Validation(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        let address: PancakeError = ValidationError::RoomOutOfRange(0).into();
        assert_eq!(address.kind(), ErrorKind::InvalidArgument);

        let ingredients: PancakeError =
            ValidationError::TooManyIngredients { count: 6, max: 5 }.into();
        assert_eq!(ingredients.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_foreign_pancake_is_not_a_lookup_failure() {
        let err = PancakeError::PancakeNotInOrder {
            pancake_id: PancakeId::new(),
            order_id: OrderId::new(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_ne!(err.kind(), PancakeError::OrderNotFound(OrderId::new()).kind());
    }
}

//! Customer orders and their status.
//!
//! # Storage
//! [`Order`] implements the [`Entity`](entity_framework::Entity) trait, so it can be kept in
//! an [`OrderRepository`](crate::repository::OrderRepository) and guarded by an
//! [`EntityLocks`](entity_framework::EntityLocks) table keyed by [`OrderId`].

use crate::model::Address;
use entity_framework::Entity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Generates a fresh, globally unique identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an order stands in the kitchen.
///
/// ```text
/// Pending --complete--> Completed --prepare--> Prepared --deliver--> (removed)
/// ```
///
/// There is no `Delivered` variant: delivering an order removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Completed,
    Prepared,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
            OrderStatus::Prepared => "Prepared",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub address: Address,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Pending order with a fresh identifier.
    pub fn new(address: Address) -> Self {
        Self {
            id: OrderId::new(),
            address,
            status: OrderStatus::Pending,
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending_with_unique_id() {
        let first = Order::new(Address::new(1, 1));
        let second = Order::new(Address::new(1, 1));

        assert_eq!(first.status, OrderStatus::Pending);
        assert_eq!(first.address, Address::new(1, 1));
        assert_ne!(first.id, second.id);
    }
}

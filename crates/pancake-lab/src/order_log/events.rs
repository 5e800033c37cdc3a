//! Events the kitchen writes to its activity journal.

use crate::model::{Address, OrderId};
use std::fmt::Display;

/// Something worth noting about an order. Each event renders as one journal line.
///
/// Pancake counts are taken before the operation changes anything: an addition to an empty
/// order reports 0, a removal from a single-pancake order reports 1.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    PancakeAdded {
        order_id: OrderId,
        address: Address,
        description: String,
        pancakes: usize,
    },
    PancakeRemoved {
        order_id: OrderId,
        address: Address,
        description: String,
        pancakes: usize,
    },
    OrderCancelled {
        order_id: OrderId,
        address: Address,
        pancakes: usize,
    },
    OrderDelivered {
        order_id: OrderId,
        address: Address,
        pancakes: usize,
    },
}

impl Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderEvent::PancakeAdded {
                order_id,
                address,
                description,
                pancakes,
            } => write!(
                f,
                "Added pancake with description '{description}' to order {order_id} \
                 containing {pancakes} pancakes, for {address}."
            ),
            OrderEvent::PancakeRemoved {
                order_id,
                address,
                description,
                pancakes,
            } => write!(
                f,
                "Removed pancake with description '{description}' from order {order_id} \
                 now containing {pancakes} pancakes, for {address}."
            ),
            OrderEvent::OrderCancelled {
                order_id,
                address,
                pancakes,
            } => write!(
                f,
                "Cancelled order {order_id} with {pancakes} pancakes for {address}."
            ),
            OrderEvent::OrderDelivered {
                order_id,
                address,
                pancakes,
            } => write!(
                f,
                "Order {order_id} with {pancakes} pancakes for {address} out for delivery."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_rendered_lines() {
        let order_id = OrderId(Uuid::nil());
        let address = Address::new(4, 12);

        let added = OrderEvent::PancakeAdded {
            order_id,
            address,
            description: "plain pancake".into(),
            pancakes: 2,
        };
        assert_eq!(
            added.to_string(),
            "Added pancake with description 'plain pancake' to order \
             00000000-0000-0000-0000-000000000000 containing 2 pancakes, for building 4, room 12."
        );

        let delivered = OrderEvent::OrderDelivered {
            order_id,
            address,
            pancakes: 3,
        };
        assert_eq!(
            delivered.to_string(),
            "Order 00000000-0000-0000-0000-000000000000 with 3 pancakes for building 4, \
             room 12 out for delivery."
        );
    }
}

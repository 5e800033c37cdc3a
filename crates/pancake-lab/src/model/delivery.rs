use crate::model::Order;
use serde::{Deserialize, Serialize};

/// What leaves the kitchen: the order in its final state and the descriptions of its
/// pancakes at the moment it was handed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub order: Order,
    pub pancakes: Vec<String>,
}

impl Delivery {
    pub fn new(order: Order, pancakes: Vec<String>) -> Self {
        Self { order, pancakes }
    }
}

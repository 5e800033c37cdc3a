//! Pancakes and the ingredient catalog.
//!
//! # Storage
//! [`Pancake`] implements the [`Entity`](entity_framework::Entity) trait and is kept in a
//! [`PancakeRepository`](crate::repository::PancakeRepository). `order_id` is a plain
//! back-reference used to find the pancakes of an order; orders don't hold their pancakes.

use crate::model::OrderId;
use entity_framework::Entity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Pancakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PancakeId(pub Uuid);

impl PancakeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PancakeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PancakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The toppings a pancake can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ingredient {
    MilkChocolate,
    DarkChocolate,
    Hazelnuts,
    WhippedCream,
}

impl Ingredient {
    /// Human-readable label used in pancake descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Ingredient::MilkChocolate => "milk chocolate",
            Ingredient::DarkChocolate => "dark chocolate",
            Ingredient::Hazelnuts => "hazelnuts",
            Ingredient::WhippedCream => "whipped cream",
        }
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pancake {
    pub id: PancakeId,
    pub order_id: OrderId,
    pub ingredients: Vec<Ingredient>,
}

impl Pancake {
    /// Creates a plain pancake belonging to `order_id`.
    pub fn new(order_id: OrderId) -> Self {
        Self {
            id: PancakeId::new(),
            order_id,
            ingredients: Vec::new(),
        }
    }

    /// Returns a copy with `ingredient` appended, leaving `self` untouched.
    pub fn with_ingredient(&self, ingredient: Ingredient) -> Self {
        let mut draft = self.clone();
        draft.ingredients.push(ingredient);
        draft
    }

    pub fn description(&self) -> String {
        if self.ingredients.is_empty() {
            return "plain pancake".to_string();
        }
        let labels: Vec<&str> = self.ingredients.iter().map(Ingredient::label).collect();
        format!(
            "Pancake with {} ingredients: {}",
            self.ingredients.len(),
            labels.join(", ")
        )
    }
}

impl Entity for Pancake {
    type Id = PancakeId;

    fn id(&self) -> PancakeId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pancake_description() {
        let pancake = Pancake::new(OrderId::new());
        assert_eq!(pancake.description(), "plain pancake");
    }

    #[test]
    fn test_description_keeps_addition_order_and_duplicates() {
        let pancake = Pancake::new(OrderId::new())
            .with_ingredient(Ingredient::WhippedCream)
            .with_ingredient(Ingredient::DarkChocolate)
            .with_ingredient(Ingredient::WhippedCream);

        assert_eq!(
            pancake.description(),
            "Pancake with 3 ingredients: whipped cream, dark chocolate, whipped cream"
        );
    }

    #[test]
    fn test_with_ingredient_leaves_source_untouched() {
        let pancake = Pancake::new(OrderId::new());
        let draft = pancake.with_ingredient(Ingredient::Hazelnuts);

        assert!(pancake.ingredients.is_empty());
        assert_eq!(draft.ingredients, vec![Ingredient::Hazelnuts]);
        assert_eq!(draft.id, pancake.id);
    }
}

//! Storage for orders and pancakes.
//!
//! Thin wrappers around [`InMemoryRepository`] adding the queries the kitchen needs. They take
//! no locks: callers mutate an order or pancake only while holding its entity guard.

use crate::model::{Order, OrderId, OrderStatus, Pancake, PancakeId};
use entity_framework::{InMemoryRepository, Repository};

#[derive(Default)]
pub struct OrderRepository {
    inner: InMemoryRepository<Order>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of every order currently in `status`.
    pub fn find_by_status(&self, status: OrderStatus) -> Vec<OrderId> {
        self.inner
            .find_where(|order| order.status == status)
            .into_iter()
            .map(|order| order.id)
            .collect()
    }

    pub fn find_completed(&self) -> Vec<OrderId> {
        self.find_by_status(OrderStatus::Completed)
    }

    pub fn find_prepared(&self) -> Vec<OrderId> {
        self.find_by_status(OrderStatus::Prepared)
    }
}

impl Repository<Order> for OrderRepository {
    fn save(&self, order: Order) -> Option<Order> {
        self.inner.save(order)
    }

    fn find(&self, id: &OrderId) -> Option<Order> {
        self.inner.find(id)
    }

    fn find_all(&self) -> Vec<Order> {
        self.inner.find_all()
    }

    fn remove(&self, id: &OrderId) -> Option<Order> {
        self.inner.remove(id)
    }
}

#[derive(Default)]
pub struct PancakeRepository {
    inner: InMemoryRepository<Pancake>,
}

impl PancakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pancake whose back-reference points at `order_id`.
    pub fn find_by_order(&self, order_id: &OrderId) -> Vec<Pancake> {
        self.inner.find_where(|pancake| pancake.order_id == *order_id)
    }
}

impl Repository<Pancake> for PancakeRepository {
    fn save(&self, pancake: Pancake) -> Option<Pancake> {
        self.inner.save(pancake)
    }

    fn find(&self, id: &PancakeId) -> Option<Pancake> {
        self.inner.find(id)
    }

    fn find_all(&self) -> Vec<Pancake> {
        self.inner.find_all()
    }

    fn remove(&self, id: &PancakeId) -> Option<Pancake> {
        self.inner.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    #[test]
    fn test_find_by_status() {
        let repo = OrderRepository::new();
        let pending = Order::new(Address::new(1, 1));
        let mut completed = Order::new(Address::new(1, 2));
        completed.status = OrderStatus::Completed;
        let mut prepared = Order::new(Address::new(1, 3));
        prepared.status = OrderStatus::Prepared;

        repo.save(pending.clone());
        repo.save(completed.clone());
        repo.save(prepared.clone());

        assert_eq!(repo.find_completed(), vec![completed.id]);
        assert_eq!(repo.find_prepared(), vec![prepared.id]);
        assert_eq!(repo.find_by_status(OrderStatus::Pending), vec![pending.id]);
    }

    #[test]
    fn test_find_by_order_ignores_other_orders() {
        let repo = PancakeRepository::new();
        let mine = OrderId::new();
        let theirs = OrderId::new();

        repo.save(Pancake::new(mine));
        repo.save(Pancake::new(mine));
        repo.save(Pancake::new(theirs));

        assert_eq!(repo.find_by_order(&mine).len(), 2);
        assert_eq!(repo.find_by_order(&theirs).len(), 1);

        repo.remove_all(repo.find_by_order(&mine));
        assert!(repo.find_by_order(&mine).is_empty());
        assert_eq!(repo.find_all().len(), 1);
    }
}

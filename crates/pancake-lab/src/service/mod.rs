//! # Pancake Service
//!
//! The order lifecycle manager. It validates input, takes the relevant entity lock, reads and
//! writes the repositories, and records what happened in the [`OrderLog`].
//!
//! ## State Machine
//!
//! ```text
//! Pending --complete--> Completed --prepare--> Prepared --deliver--> (removed)
//! Pending | Completed | Prepared --cancel--> (removed)
//! ```
//!
//! ## Locking
//!
//! - Everything that changes an order, or the set of pancakes in it, runs under that order's
//!   lock. Two operations on one order never interleave.
//! - Adding an ingredient runs under the pancake's lock only.
//! - Deleting a pancake takes its lock while already holding the order's. Locks are always
//!   taken order first, then pancake, so the two tables can't deadlock.
//! - Cancel and deliver lock every pancake of the order before they record or delete
//!   anything. All waiting happens up front; an operation dropped while waiting changes
//!   nothing.
//! - A lock is released (removed from its table) when its entity is deleted, or when the
//!   operation finds the entity missing.
//!
//! `start_order`, `view_order` and the listing queries take no lock and never wait.

pub mod error;

pub use error::*;

use crate::model::{Address, Delivery, Ingredient, Order, OrderId, OrderStatus, Pancake, PancakeId};
use crate::order_log::{OrderEvent, OrderLog};
use crate::repository::{OrderRepository, PancakeRepository};
use crate::validators::{AddressValidator, PancakeValidator, Validator};
use entity_framework::{EntityGuard, EntityLocks, Repository};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Handle on the order lifecycle. Cheap to clone; clones share storage and locks.
#[derive(Clone)]
pub struct PancakeService {
    address_validator: AddressValidator,
    pancake_validator: PancakeValidator,
    orders: Arc<OrderRepository>,
    pancakes: Arc<PancakeRepository>,
    order_log: OrderLog,
    order_locks: Arc<EntityLocks<OrderId>>,
    pancake_locks: Arc<EntityLocks<PancakeId>>,
}

impl PancakeService {
    pub fn new(
        address_validator: AddressValidator,
        pancake_validator: PancakeValidator,
        orders: Arc<OrderRepository>,
        pancakes: Arc<PancakeRepository>,
        order_log: OrderLog,
    ) -> Self {
        Self {
            address_validator,
            pancake_validator,
            orders,
            pancakes,
            order_log,
            order_locks: Arc::new(EntityLocks::new("order")),
            pancake_locks: Arc::new(EntityLocks::new("pancake")),
        }
    }

    /// Opens a new Pending order for delivery to `address`.
    #[instrument(skip(self))]
    pub fn start_order(&self, address: Address) -> Result<OrderId, PancakeError> {
        self.address_validator
            .validate(&address)
            .inspect_err(|e| warn!(error = %e, "Address rejected"))?;

        let order = Order::new(address);
        let order_id = order.id;
        self.orders.save(order);

        info!(%order_id, "Order started");
        Ok(order_id)
    }

    /// Adds a plain pancake to the order.
    #[instrument(skip(self))]
    pub async fn add_pancake(&self, order_id: OrderId) -> Result<PancakeId, PancakeError> {
        let mut guard = self.order_locks.lock(&order_id).await;
        let order = self.find_order(&mut guard)?;

        let count = self.pancakes.find_by_order(&order_id).len();
        let pancake = Pancake::new(order_id);
        let pancake_id = pancake.id;
        let description = pancake.description();
        self.pancakes.save(pancake);

        self.order_log.record(OrderEvent::PancakeAdded {
            order_id,
            address: order.address,
            description,
            pancakes: count,
        });

        info!(%order_id, %pancake_id, pancakes = count + 1, "Pancake added");
        Ok(pancake_id)
    }

    /// Takes a pancake off the order. The pancake must belong to this order.
    #[instrument(skip(self))]
    pub async fn remove_pancake(
        &self,
        order_id: OrderId,
        pancake_id: PancakeId,
    ) -> Result<PancakeId, PancakeError> {
        let mut order_guard = self.order_locks.lock(&order_id).await;
        let order = self.find_order(&mut order_guard)?;

        let mut pancake_guard = self.pancake_locks.lock(&pancake_id).await;
        let pancake = self.find_pancake(&mut pancake_guard)?;
        if pancake.order_id != order_id {
            warn!(%order_id, %pancake_id, owner = %pancake.order_id, "Pancake belongs to another order");
            return Err(PancakeError::PancakeNotInOrder {
                pancake_id,
                order_id,
            });
        }

        let count = self.pancakes.find_by_order(&order_id).len();
        self.pancakes.remove(&pancake_id);
        pancake_guard.release();

        self.order_log.record(OrderEvent::PancakeRemoved {
            order_id,
            address: order.address,
            description: pancake.description(),
            pancakes: count,
        });

        info!(%order_id, %pancake_id, pancakes = count - 1, "Pancake removed");
        Ok(pancake_id)
    }

    /// Puts `ingredient` on a pancake.
    ///
    /// The change is built on a copy and saved only once it validates, so a rejected
    /// ingredient leaves the stored pancake exactly as it was.
    #[instrument(skip(self))]
    pub async fn add_ingredient(
        &self,
        pancake_id: PancakeId,
        ingredient: Ingredient,
    ) -> Result<PancakeId, PancakeError> {
        let mut guard = self.pancake_locks.lock(&pancake_id).await;
        let pancake = self.find_pancake(&mut guard)?;

        let draft = pancake.with_ingredient(ingredient);
        self.pancake_validator
            .validate(&draft)
            .inspect_err(|e| warn!(%pancake_id, error = %e, "Ingredient rejected"))?;

        let count = draft.ingredients.len();
        self.pancakes.save(draft);

        info!(%pancake_id, %ingredient, ingredients = count, "Ingredient added");
        Ok(pancake_id)
    }

    /// Descriptions of every pancake currently in the order.
    #[instrument(skip(self))]
    pub fn view_order(&self, order_id: OrderId) -> Result<Vec<String>, PancakeError> {
        if self.orders.find(&order_id).is_none() {
            warn!(%order_id, "Order not found");
            return Err(PancakeError::OrderNotFound(order_id));
        }

        Ok(self
            .pancakes
            .find_by_order(&order_id)
            .iter()
            .map(Pancake::description)
            .collect())
    }

    /// Drops the order and all of its pancakes, whatever its status.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<OrderId, PancakeError> {
        let mut guard = self.order_locks.lock(&order_id).await;
        let order = self.find_order(&mut guard)?;

        let pancake_guards = self
            .lock_pancakes(&self.pancakes.find_by_order(&order_id))
            .await;

        self.order_log.record(OrderEvent::OrderCancelled {
            order_id,
            address: order.address,
            pancakes: pancake_guards.len(),
        });

        let removed = self.delete_pancakes(pancake_guards);
        self.orders.remove(&order_id);
        guard.release();

        info!(%order_id, pancakes = removed.len(), "Order cancelled");
        Ok(order_id)
    }

    /// Pending -> Completed.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, order_id: OrderId) -> Result<OrderId, PancakeError> {
        self.advance(order_id, OrderStatus::Pending, OrderStatus::Completed)
            .await
    }

    /// Completed -> Prepared.
    #[instrument(skip(self))]
    pub async fn prepare_order(&self, order_id: OrderId) -> Result<OrderId, PancakeError> {
        self.advance(order_id, OrderStatus::Completed, OrderStatus::Prepared)
            .await
    }

    /// Hands a Prepared order over for delivery and removes it, with its pancakes, from the
    /// kitchen.
    #[instrument(skip(self))]
    pub async fn deliver_order(&self, order_id: OrderId) -> Result<Delivery, PancakeError> {
        let mut guard = self.order_locks.lock(&order_id).await;
        let order = self.find_order(&mut guard)?;
        ensure_status(&order, OrderStatus::Prepared)?;

        let pancake_guards = self
            .lock_pancakes(&self.pancakes.find_by_order(&order_id))
            .await;

        self.order_log.record(OrderEvent::OrderDelivered {
            order_id,
            address: order.address,
            pancakes: pancake_guards.len(),
        });

        let descriptions: Vec<String> = self
            .delete_pancakes(pancake_guards)
            .iter()
            .map(Pancake::description)
            .collect();
        self.orders.remove(&order_id);
        guard.release();

        info!(%order_id, pancakes = descriptions.len(), "Order out for delivery");
        Ok(Delivery::new(order, descriptions))
    }

    pub fn list_completed_orders(&self) -> Vec<OrderId> {
        self.orders.find_completed()
    }

    pub fn list_prepared_orders(&self) -> Vec<OrderId> {
        self.orders.find_prepared()
    }

    /// Number of (order, pancake) lock tokens currently held in memory.
    pub fn lock_table_sizes(&self) -> (usize, usize) {
        (self.order_locks.len(), self.pancake_locks.len())
    }

    async fn advance(
        &self,
        order_id: OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<OrderId, PancakeError> {
        self.order_locks
            .with_lock(&order_id, |guard| -> Result<OrderId, PancakeError> {
                let mut order = self.find_order(guard)?;
                ensure_status(&order, expected)?;

                order.status = next;
                self.orders.save(order);

                info!(%order_id, status = %next, "Order advanced");
                Ok(order_id)
            })
            .await
    }

    /// Locks every given pancake. Caller must hold the owning order's lock, so no pancake can
    /// join or leave the order meanwhile.
    ///
    /// This is the last suspension point of a bulk delete: once it returns, the caller
    /// records and deletes without awaiting. Dropping the future before that leaves the
    /// order untouched.
    async fn lock_pancakes(&self, pancakes: &[Pancake]) -> Vec<EntityGuard<'_, PancakeId>> {
        let mut guards = Vec::with_capacity(pancakes.len());
        for pancake in pancakes {
            guards.push(self.pancake_locks.lock(&pancake.id).await);
        }
        guards
    }

    /// Deletes the locked pancakes, releasing their tokens, and returns them as they were when
    /// removed.
    fn delete_pancakes(&self, guards: Vec<EntityGuard<'_, PancakeId>>) -> Vec<Pancake> {
        guards
            .into_iter()
            .filter_map(|mut guard| {
                let removed = self.pancakes.remove(guard.key());
                guard.release();
                removed
            })
            .inspect(|pancake| debug!(pancake_id = %pancake.id, "Pancake deleted"))
            .collect()
    }

    fn find_order(&self, guard: &mut EntityGuard<'_, OrderId>) -> Result<Order, PancakeError> {
        let order_id = *guard.key();
        match self.orders.find(&order_id) {
            Some(order) => Ok(order),
            None => {
                guard.release();
                warn!(%order_id, "Order not found");
                Err(PancakeError::OrderNotFound(order_id))
            }
        }
    }

    fn find_pancake(
        &self,
        guard: &mut EntityGuard<'_, PancakeId>,
    ) -> Result<Pancake, PancakeError> {
        let pancake_id = *guard.key();
        match self.pancakes.find(&pancake_id) {
            Some(pancake) => Ok(pancake),
            None => {
                guard.release();
                warn!(%pancake_id, "Pancake not found");
                Err(PancakeError::PancakeNotFound(pancake_id))
            }
        }
    }
}

fn ensure_status(order: &Order, expected: OrderStatus) -> Result<(), PancakeError> {
    if order.status != expected {
        warn!(order_id = %order.id, %expected, actual = %order.status, "Wrong status");
        return Err(PancakeError::WrongStatus {
            order_id: order.id,
            expected,
            actual: order.status,
        });
    }
    Ok(())
}

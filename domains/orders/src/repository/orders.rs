//! Order repository
//!
//! In-memory mock persistence with simulated round-trip latency. Status
//! changes go through the order state machine; invalid transitions are
//! surfaced as validation errors and leave the order untouched.

use std::sync::{Arc, RwLock};

use backoffice_common::{Error, Latency, Result};

use crate::domain::entities::{Order, OrderStatus};
use crate::domain::state::{OrderEvent, OrderStateMachine};

#[derive(Clone)]
pub struct OrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    latency: Latency,
}

impl OrderRepository {
    pub fn new(latency: Latency) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    pub fn seeded(orders: Vec<Order>, latency: Latency) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders)),
            latency,
        }
    }

    /// List all orders in insertion order
    pub async fn list(&self) -> Result<Vec<Order>> {
        self.latency.simulate().await;
        let orders = self.orders.read().expect("store lock poisoned");
        Ok(orders.clone())
    }

    /// Find an order by id
    pub async fn get(&self, id: &str) -> Result<Option<Order>> {
        self.latency.simulate().await;
        let orders = self.orders.read().expect("store lock poisoned");
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    /// Apply a status transition to an order
    pub async fn update_status(&self, id: &str, event: OrderEvent) -> Result<Order> {
        self.latency.simulate().await;

        let mut orders = self.orders.write().expect("store lock poisoned");
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| Error::NotFound(format!("Order {} not found", id)))?;

        let next = OrderStateMachine::transition(order.status, event)
            .map_err(|e| Error::Validation(e.to_string()))?;

        tracing::debug!(order_id = %id, from = %order.status, to = %next, "Order status transition");

        order.status = next;
        Ok(order.clone())
    }

    /// Count of orders currently in the given status
    pub async fn count_in_status(&self, status: OrderStatus) -> Result<usize> {
        self.latency.simulate().await;
        let orders = self.orders.read().expect("store lock poisoned");
        Ok(orders.iter().filter(|o| o.status == status).count())
    }
}

use crate::domain::event::OrderEvent;
use crate::domain::order::Order;
use crate::domain::ports::{EventPublisher, OrderStore};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// A thread-safe in-memory order table.
///
/// Rows are kept in insertion order so `find_by_user` matches the natural
/// row order of a freshly written SQL table. Ideal for tests or runs where
/// persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        // Same rule as the SQL primary key
        if orders.iter().any(|o| o.id == order.id) {
            return Err(OrderError::DuplicateOrder(order.id));
        }
        orders.push(order.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.belongs_to(user_id))
            .cloned()
            .collect())
    }
}

/// Keeps every published event in memory.
///
/// Clones share the same log, so a test can hand one clone to the service
/// and inspect the other.
#[derive(Default, Clone)]
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<OrderEvent>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OrderEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl EventPublisher for RecordingEventPublisher {
    fn publish(&self, event: OrderEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

use super::event::OrderEvent;
use super::order::Order;
use super::payment::{PaymentRequest, PaymentResult};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new row. A second insert with the same id fails.
    async fn insert(&self, order: &Order) -> Result<()>;
    /// All orders of `user_id` in the store's natural row order.
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>>;
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult>;
}

pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: OrderEvent);
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type EventPublisherBox = Box<dyn EventPublisher>;

pub type OrderStoreFactory = Box<dyn Fn() -> OrderStoreBox + Send + Sync>;

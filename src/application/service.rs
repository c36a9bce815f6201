use crate::domain::event::OrderEvent;
use crate::domain::order::Order;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::{EventPublisherBox, OrderStoreBox, PaymentGatewayBox};
use crate::error::Result;

/// Entry point for order bookkeeping and payments.
///
/// `OrderService` owns its adapters and runs every operation as one awaited
/// call against them. Failures are handed straight back to the caller.
pub struct OrderService {
    order_store: OrderStoreBox,
    payment_gateway: PaymentGatewayBox,
    events: EventPublisherBox,
}

impl OrderService {
    /// Creates a new `OrderService` instance.
    ///
    /// # Arguments
    ///
    /// * `order_store` - Where orders are persisted.
    /// * `payment_gateway` - The external payment processor.
    /// * `events` - Receives an `OrderCreated` event per stored order.
    pub fn new(
        order_store: OrderStoreBox,
        payment_gateway: PaymentGatewayBox,
        events: EventPublisherBox,
    ) -> Self {
        Self {
            order_store,
            payment_gateway,
            events,
        }
    }

    /// Stores `order` under its caller-supplied id and returns it unchanged.
    ///
    /// The `OrderCreated` event is only published once the insert succeeded.
    pub async fn create_order(&self, order: Order) -> Result<Order> {
        self.order_store.insert(&order).await?;
        self.events.publish(OrderEvent::OrderCreated { order_id: order.id });
        Ok(order)
    }

    /// Lists every order placed by `user_id`.
    pub async fn orders_by_user(&self, user_id: i32) -> Result<Vec<Order>> {
        self.order_store.find_by_user(user_id).await
    }

    /// Forwards a charge to the payment processor.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<PaymentResult> {
        self.payment_gateway.charge(&request).await
    }
}

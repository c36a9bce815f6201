use crate::domain::event::OrderEvent;
use crate::domain::ports::EventPublisher;
use tracing::info;

/// Publishes events as structured log lines.
///
/// Each event becomes one INFO record carrying `event` and `order_id`
/// fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl EventPublisher for TracingEventPublisher {
    fn publish(&self, event: OrderEvent) {
        info!(
            event = event.name(),
            order_id = event.order_id(),
            "Event: {}",
            event.name()
        );
    }
}

use std::fmt;

/// Domain events raised by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    OrderCreated { order_id: i32 },
}

impl OrderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::OrderCreated { .. } => "OrderCreated",
        }
    }

    pub fn order_id(&self) -> i32 {
        match self {
            OrderEvent::OrderCreated { order_id } => *order_id,
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(order_id={})", self.name(), self.order_id())
    }
}

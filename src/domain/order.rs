use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase record linking a user to a product.
///
/// The id is chosen by the caller and persisted verbatim; the store never
/// assigns one.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Price of the whole line, not per unit.
    pub total: Decimal,
}

impl Order {
    pub fn new(id: i32, user_id: i32, product_id: i32, quantity: i32, total: Decimal) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
            total,
        }
    }

    pub fn belongs_to(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

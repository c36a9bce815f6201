use crate::domain::order::Order;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads orders from a CSV source with an `id,user_id,product_id,quantity,total`
/// header.
///
/// Whitespace around fields is trimmed, so hand-written files with
/// `1, 7, 3, 2, 19.98` style rows load as well.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    ///
    /// A bad row yields an `Err` for that row only; iteration carries on.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}

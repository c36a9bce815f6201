use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes orders as CSV with a header row.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every order and flushes.
    ///
    /// The header is written even when `orders` is empty so consumers always
    /// see the column layout.
    pub fn write_orders<I>(&mut self, orders: I) -> Result<()>
    where
        I: IntoIterator<Item = Order>,
    {
        self.writer
            .write_record(["id", "user_id", "product_id", "quantity", "total"])?;
        for order in orders {
            self.writer.write_record([
                order.id.to_string(),
                order.user_id.to_string(),
                order.product_id.to_string(),
                order.quantity.to_string(),
                order.total.to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_output() {
        let mut buf = Vec::new();
        OrderWriter::new(&mut buf)
            .write_orders(vec![
                Order::new(1, 7, 3, 2, dec!(19.98)),
                Order::new(2, 7, 4, 1, dec!(5.00)),
            ])
            .unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "id,user_id,product_id,quantity,total\n1,7,3,2,19.98\n2,7,4,1,5.00\n"
        );
    }

    #[test]
    fn test_writer_empty_still_has_header() {
        let mut buf = Vec::new();
        OrderWriter::new(&mut buf).write_orders(Vec::new()).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,user_id,product_id,quantity,total\n"
        );
    }
}

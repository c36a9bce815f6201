use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A charge sent to the external payment processor.
///
/// `amount` goes over the wire as a JSON number carrying every digit.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub card_token: String,
}

impl PaymentRequest {
    pub fn new(amount: Decimal, card_token: impl Into<String>) -> Self {
        Self {
            amount,
            card_token: card_token.into(),
        }
    }
}

/// The processor's verdict, returned to the caller untouched.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub success: bool,
    pub transaction_id: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = PaymentRequest::new(dec!(42.5), "tok_visa");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"amount": 42.5, "cardToken": "tok_visa"}));
    }

    #[test]
    fn test_request_wire_format_keeps_every_digit() {
        let request = PaymentRequest::new(dec!(1234567890.123456789), "tok_visa");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"amount":1234567890.123456789,"cardToken":"tok_visa"}"#
        );

        let request = PaymentRequest::new(dec!(12345678901234567.89), "tok_visa");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"amount":12345678901234567.89,"cardToken":"tok_visa"}"#
        );
    }

    #[test]
    fn test_result_message_defaults_to_empty() {
        let result: PaymentResult =
            serde_json::from_str(r#"{"success": true, "transactionId": "txn_1"}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.transaction_id, "txn_1");
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_result_requires_transaction_id() {
        let result = serde_json::from_str::<PaymentResult>(r#"{"success": false}"#);
        assert!(result.is_err());
    }
}

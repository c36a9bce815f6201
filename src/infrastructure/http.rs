use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Where charges go unless configured otherwise.
pub const DEFAULT_PAYMENT_ENDPOINT: &str = "https://payment-api.example.com/charge";

/// Relays charges to an external payment API over HTTP.
///
/// One POST per charge with a JSON body. No timeout or retry is applied, and
/// the response body is parsed whatever the status code: processors report
/// declines in the body.
#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPaymentGateway {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn charge(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        debug!(endpoint = %self.endpoint, amount = %request.amount, "Sending charge");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let result: PaymentResult = serde_json::from_str(&body)?;

        debug!(
            %status,
            success = result.success,
            transaction_id = %result.transaction_id,
            "Charge answered"
        );
        Ok(result)
    }
}

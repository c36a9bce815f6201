#![allow(dead_code)]

use axum::Router;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::post;
use rand::Rng;
use serde_json::Value;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const ORDER_HEADER: [&str; 5] = ["id", "user_id", "product_id", "quantity", "total"];

pub fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

/// Writes `rows` orders with ids 1..=rows, all for `user_id`.
pub fn generate_csv(path: &Path, rows: usize, user_id: i32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(ORDER_HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            i.to_string(),
            user_id.to_string(),
            "100".to_string(),
            "1".to_string(),
            "9.99".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` orders spread randomly over users 1..=`users`.
pub fn generate_mixed_csv(path: &Path, rows: usize, users: i32) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(ORDER_HEADER)?;

    let mut rng = rand::thread_rng();
    for i in 1..=rows {
        let user_id: i32 = rng.gen_range(1..=users);
        let quantity: i32 = rng.gen_range(1..=5);
        wtr.write_record([
            i.to_string(),
            user_id.to_string(),
            rng.gen_range(1..=50).to_string(),
            quantity.to_string(),
            format!("{}.50", quantity * 3),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

struct MockPaymentState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

/// A local stand-in for the payment API.
pub struct MockPaymentApi {
    pub url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl MockPaymentApi {
    pub fn requests(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn charge(
    State(state): State<Arc<MockPaymentState>>,
    Json(payload): Json<Value>,
) -> (StatusCode, String) {
    state.received.lock().unwrap().push(payload);
    (state.status, state.body.clone())
}

/// Serves `POST /charge` on an ephemeral port, answering every call with
/// `status` and the raw `body`.
pub async fn spawn_payment_api(status: StatusCode, body: impl Into<String>) -> MockPaymentApi {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(MockPaymentState {
        status,
        body: body.into(),
        received: received.clone(),
    });

    let app = Router::new()
        .route("/charge", post(charge))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockPaymentApi {
        url: format!("http://{}/charge", addr),
        received,
    }
}

/// A URL nothing is listening on.
pub fn dead_payment_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/charge", addr)
}

//! Payment endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;

use super::CreatedResponse;
use crate::db::repos::{Payment, PaymentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{FormFields, IdPath};
use crate::http::server::AppState;

/// Payment response
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: i64,
    pub job_id: i64,
    pub amount: i64,
    pub paid_at: String,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            job_id: p.job_id,
            amount: p.amount,
            paid_at: p.paid_at.to_rfc3339(),
        }
    }
}

/// POST /payment - record a payment against a job
async fn create_payment(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> Result<Json<CreatedResponse>, ApiError> {
    let job_id = form.int("job_id")?;
    let amount = form.int("amount")?;

    let payment = PaymentRepo::new(&state.pool).create(job_id, amount).await?;
    tracing::info!(id = payment.id, job_id, amount, "Recorded payment");

    Ok(Json(CreatedResponse { id: payment.id }))
}

/// GET /payments/{job_id} - list payments for a job
async fn list_payments(
    State(state): State<Arc<AppState>>,
    IdPath(job_id): IdPath,
) -> Result<Json<Vec<PaymentResponse>>, ApiError> {
    let payments = PaymentRepo::new(&state.pool).list_for_job(job_id).await?;

    Ok(Json(payments.into_iter().map(PaymentResponse::from).collect()))
}

/// Payment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/payment", post(create_payment))
        .route("/payments/{job_id}", get(list_payments))
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use rand::Rng;
use tracing::info;

use bosan_types::api::{CreatePaymentRequest, UpdatePaymentStatusRequest};
use bosan_types::models::{NewPayment, PaymentPatch, PaymentStatus};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::validate::Violations;

/// `PAY-<millis>-<random digits>` — unique per transaction, independent of
/// the integer id.
fn generate_reference() -> String {
    let suffix: u32 = rand::rng().random_range(0..1000);
    format!("PAY-{}-{}", Utc::now().timestamp_millis(), suffix)
}

pub async fn list_my_payments(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> impl IntoResponse {
    Json(state.store.get_user_payments(current.id))
}

/// The caller only chooses amount and purpose; the reference and the
/// Pending status are server-assigned no matter what the body says.
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.positive("amount", req.amount);
    v.non_empty("purpose", &req.purpose);
    v.finish()?;

    let payment = state.store.create_payment(NewPayment {
        user_id: current.id,
        amount: req.amount,
        purpose: req.purpose,
        reference: generate_reference(),
        status: PaymentStatus::Pending,
    });

    info!("Payment {} initiated by user {}", payment.reference, current.id);
    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn verify_payment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state
        .store
        .get_payment_by_reference(&reference)
        .ok_or(ApiError::NotFound("Payment"))?;

    // A gateway callback would confirm the charge here; the mock gateway
    // always succeeds.
    let updated = state.store.update_payment(
        payment.id,
        PaymentPatch {
            status: Some(PaymentStatus::Successful),
        },
    )?;

    Ok(Json(updated))
}

// ── Admin ───────────────────────────────────────────────────────────────

/// Every member's payments in one list, newest first. Full-table scan with
/// no pagination.
pub async fn admin_list_payments(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_all_payments())
}

pub async fn admin_update_payment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.store.update_payment(
        id,
        PaymentPatch {
            status: Some(req.status),
        },
    )?;
    Ok(Json(payment))
}

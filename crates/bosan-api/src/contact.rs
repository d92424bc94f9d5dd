use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use bosan_types::api::{ContactRequest, CreatedResponse, UpdateContactMessageRequest};
use bosan_types::models::{ContactMessagePatch, NewContactMessage};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::validate::Violations;

/// Public contact form.
pub async fn submit_contact_message(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.non_empty("name", &req.name);
    v.email("email", &req.email);
    v.non_empty("subject", &req.subject);
    v.non_empty("message", &req.message);
    v.finish()?;

    let message = state.store.create_contact_message(NewContactMessage {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    });

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: message.id,
        }),
    ))
}

// ── Admin ───────────────────────────────────────────────────────────────

pub async fn admin_list_messages(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_contact_messages())
}

pub async fn admin_update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContactMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = state.store.update_contact_message(
        id,
        ContactMessagePatch {
            is_read: Some(req.is_read),
        },
    )?;
    Ok(Json(message))
}

pub async fn admin_delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_contact_message(id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

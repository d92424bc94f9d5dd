use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use bosan_types::api::{CreateEventRequest, CreatedResponse, UpdateEventRequest};
use bosan_types::models::{EventPatch, NewEvent, NewRegistration};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::validate::Violations;

// ── Public listings ─────────────────────────────────────────────────────

pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_events())
}

pub async fn list_upcoming_events(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_upcoming_events())
}

pub async fn list_past_events(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_past_events())
}

// ── Member registration ─────────────────────────────────────────────────

pub async fn register_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    if state.store.get_event(event_id).is_none() {
        return Err(ApiError::NotFound("Event"));
    }

    // Insert-if-absent in the store; a duplicate comes back as a 400.
    let registration = state.store.create_event_registration(NewRegistration {
        event_id,
        user_id: current.id,
    })?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: registration.id,
        }),
    ))
}

// ── Admin ───────────────────────────────────────────────────────────────

pub async fn admin_create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.non_empty("title", &req.title);
    v.non_empty("description", &req.description);
    v.non_empty("venue", &req.venue);
    v.non_empty("time", &req.time);
    v.finish()?;

    let event = state.store.create_event(NewEvent {
        title: req.title,
        description: req.description,
        date: req.date,
        venue: req.venue,
        time: req.time,
        image: req.image,
        is_past: req.is_past,
    });

    info!("Created event {} ({})", event.title, event.id);
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn admin_update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.store.update_event(
        id,
        EventPatch {
            title: req.title,
            description: req.description,
            date: req.date,
            venue: req.venue,
            time: req.time,
            image: req.image,
            is_past: req.is_past,
        },
    )?;
    Ok(Json(event))
}

pub async fn admin_delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_event(id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

pub async fn admin_list_registrations(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if state.store.get_event(event_id).is_none() {
        return Err(ApiError::NotFound("Event"));
    }
    Ok(Json(state.store.get_event_registrations(event_id)))
}

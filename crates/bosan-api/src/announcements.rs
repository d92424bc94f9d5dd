use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use bosan_types::api::{CreateAnnouncementRequest, UpdateAnnouncementRequest};
use bosan_types::models::{AnnouncementPatch, NewAnnouncement};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::validate::Violations;

pub async fn list_announcements(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_announcements())
}

pub async fn admin_create_announcement(
    State(state): State<AppState>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.non_empty("title", &req.title);
    v.non_empty("content", &req.content);
    v.finish()?;

    let announcement = state.store.create_announcement(NewAnnouncement {
        title: req.title,
        content: req.content,
        kind: req.kind.unwrap_or_else(|| "General".to_string()),
        is_important: req.is_important,
        link: req.link,
    });

    Ok((StatusCode::CREATED, Json(announcement)))
}

pub async fn admin_update_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateAnnouncementRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let announcement = state.store.update_announcement(
        id,
        AnnouncementPatch {
            title: req.title,
            content: req.content,
            kind: req.kind,
            is_important: req.is_important,
            link: req.link,
        },
    )?;
    Ok(Json(announcement))
}

pub async fn admin_delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_announcement(id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

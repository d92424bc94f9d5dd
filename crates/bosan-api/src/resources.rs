use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use bosan_types::api::{CreateResourceRequest, UpdateResourceRequest};
use bosan_types::models::{NewResource, ResourcePatch};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::validate::Violations;

/// Member-only listing; the router puts this behind `require_auth`.
pub async fn list_resources(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_resources())
}

pub async fn admin_create_resource(
    State(state): State<AppState>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.non_empty("title", &req.title);
    v.non_empty("category", &req.category);
    v.non_empty("fileUrl", &req.file_url);
    v.finish()?;

    let resource = state.store.create_resource(NewResource {
        title: req.title,
        description: req.description,
        category: req.category,
        file_url: req.file_url,
        thumbnail: req.thumbnail,
    });

    Ok((StatusCode::CREATED, Json(resource)))
}

pub async fn admin_update_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateResourceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let resource = state.store.update_resource(
        id,
        ResourcePatch {
            title: req.title,
            description: req.description,
            category: req.category,
            file_url: req.file_url,
            thumbnail: req.thumbnail,
        },
    )?;
    Ok(Json(resource))
}

pub async fn admin_delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_resource(id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

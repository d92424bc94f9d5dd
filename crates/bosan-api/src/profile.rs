use axum::{Extension, Json, extract::State, response::IntoResponse};

use bosan_types::api::UpdateProfileRequest;
use bosan_types::models::UserPatch;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::validate::Violations;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .store
        .get_user(current.id)
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user))
}

/// Self-service update. `UpdateProfileRequest` has no password or role
/// field, so privilege escalation through this endpoint is a type error
/// rather than a runtime strip.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    if let Some(username) = &req.username {
        v.username(username);
    }
    if let Some(email) = &req.email {
        v.email("email", email);
    }
    if let Some(full_name) = &req.full_name {
        v.non_empty("fullName", full_name);
    }
    v.finish()?;

    let user = state.store.update_user(
        current.id,
        UserPatch {
            username: req.username,
            email: req.email,
            password: None,
            full_name: req.full_name,
            role: None,
            specialty: req.specialty,
            year_elevated: req.year_elevated,
            profile_image: req.profile_image,
        },
    )?;
    Ok(Json(user))
}

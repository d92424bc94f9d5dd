use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use bosan_types::api::{AdminCreateMemberRequest, AdminUpdateMemberRequest, PublicMember};
use bosan_types::models::{NewUser, Role, UserPatch};

use crate::auth::{AppState, hash_password};
use crate::error::ApiError;
use crate::validate::Violations;

/// Public roster: sensitive fields stripped down to the display subset.
pub async fn list_public_members(State(state): State<AppState>) -> impl IntoResponse {
    let members: Vec<PublicMember> = state.store.get_users().iter().map(PublicMember::from).collect();
    Json(members)
}

// ── Admin ───────────────────────────────────────────────────────────────

/// Full member records for the back office. The password hash never
/// serializes, so the response is safe as-is.
pub async fn admin_list_members(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.get_users())
}

pub async fn admin_create_member(
    State(state): State<AppState>,
    Json(req): Json<AdminCreateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.username(&req.username);
    v.email("email", &req.email);
    v.password(&req.password);
    v.non_empty("fullName", &req.full_name);
    v.finish()?;

    let password = hash_password(&req.password)?;

    let user = state.store.create_user(NewUser {
        username: req.username,
        email: req.email,
        password,
        full_name: req.full_name,
        role: req.role.unwrap_or(Role::Member),
        specialty: req.specialty,
        year_elevated: req.year_elevated,
        profile_image: req.profile_image,
    })?;

    info!("Admin created member {} ({})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn admin_update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AdminUpdateMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // A supplied password arrives in the clear and is re-hashed.
    let password = match req.password.as_deref() {
        Some(plain) => Some(hash_password(plain)?),
        None => None,
    };

    let user = state.store.update_user(
        id,
        UserPatch {
            username: req.username,
            email: req.email,
            password,
            full_name: req.full_name,
            role: req.role,
            specialty: req.specialty,
            year_elevated: req.year_elevated,
            profile_image: req.profile_image,
        },
    )?;
    Ok(Json(user))
}

/// Admin accounts cannot be deleted through the member endpoint.
pub async fn admin_delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let target = state.store.get_user(id).ok_or(ApiError::NotFound("User"))?;
    if target.role == Role::Admin {
        return Err(ApiError::Conflict(
            "Cannot delete an admin account".to_string(),
        ));
    }

    state.store.delete_user(id)?;
    info!("Admin deleted member {} ({})", target.username, target.id);
    Ok(Json(serde_json::json!({ "success": true })))
}

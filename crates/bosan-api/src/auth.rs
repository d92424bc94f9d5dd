use std::sync::Arc;

use anyhow::anyhow;
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::info;
use uuid::Uuid;

use bosan_store::Store;
use bosan_types::api::{LoginRequest, RegisterRequest};
use bosan_types::models::{NewUser, Role};

use crate::error::ApiError;
use crate::middleware::{CurrentUser, SESSION_COOKIE};
use crate::sessions::SessionStore;
use crate::validate::Violations;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
    pub sessions: SessionStore,
}

/// Hash a password with Argon2id. Used by registration, the admin member
/// endpoints, and the bootstrap admin seeding.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

fn session_cookie(sid: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, sid.to_string()))
        .path("/")
        .http_only(true)
        .build()
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut v = Violations::new();
    v.username(&req.username);
    v.email("email", &req.email);
    v.password(&req.password);
    v.non_empty("fullName", &req.full_name);
    v.finish()?;

    let password = hash_password(&req.password)?;

    // Uniqueness is enforced inside the store; conflicts come back as 400s.
    let user = state.store.create_user(NewUser {
        username: req.username,
        email: req.email,
        password,
        full_name: req.full_name,
        role: Role::Member,
        specialty: req.specialty,
        year_elevated: req.year_elevated,
        profile_image: req.profile_image,
    })?;

    let sid = state.sessions.create(user.id).await;
    info!("Registered member {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, jar.add(session_cookie(sid)), Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Unknown account and wrong password get the same answer.
    let user = state
        .store
        .get_user_by_username(&req.username)
        .ok_or(ApiError::Unauthorized)?;

    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|e| anyhow!("Stored hash unreadable: {}", e))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::Unauthorized)?;

    let sid = state.sessions.create(user.id).await;

    Ok((jar.add(session_cookie(sid)), Json(user)))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(sid) = cookie.value().parse::<Uuid>() {
            state.sessions.destroy(sid).await;
        }
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    Ok((jar, Json(serde_json::json!({ "success": true }))))
}

/// The logged-in user's own record.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .store
        .get_user(current.id)
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user))
}

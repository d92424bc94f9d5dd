use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use bosan_types::models::Role;

use crate::auth::AppState;
use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "bosan_session";

/// The logged-in user a guard resolved for this request, inserted as a
/// request extension for downstream handlers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i64,
    pub role: Role,
}

async fn resolve_session(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let sid: Uuid = jar.get(SESSION_COOKIE)?.value().parse().ok()?;
    let user_id = state.sessions.get(sid).await?;
    // A session surviving its user (deleted account) does not authenticate.
    let user = state.store.get_user(user_id)?;
    Some(CurrentUser {
        id: user.id,
        role: user.role,
    })
}

/// Reject the request with 401 unless the session cookie resolves to a
/// live user.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_session(&state, &jar)
        .await
        .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Like `require_auth`, but additionally demands the admin role (403 for
/// a logged-in member).
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = resolve_session(&state, &jar)
        .await
        .ok_or(ApiError::Unauthorized)?;

    if user.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

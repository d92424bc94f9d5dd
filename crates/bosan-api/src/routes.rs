use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
};

use crate::auth::{self, AppState};
use crate::middleware::{require_admin, require_auth};
use crate::{announcements, contact, events, members, payments, profile, resources};

/// Assemble the full API surface: public, session, authenticated and admin
/// route groups, each with its guard layered on.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/announcements", get(announcements::list_announcements))
        .route("/api/events", get(events::list_events))
        .route("/api/events/upcoming", get(events::list_upcoming_events))
        .route("/api/events/past", get(events::list_past_events))
        .route("/api/members", get(members::list_public_members))
        .route("/api/contact", post(contact::submit_contact_message))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .with_state(state.clone());

    let authenticated = Router::new()
        .route("/api/user", get(auth::current_user))
        .route("/api/resources", get(resources::list_resources))
        .route(
            "/api/events/{event_id}/register",
            post(events::register_for_event),
        )
        .route(
            "/api/payments",
            get(payments::list_my_payments).post(payments::create_payment),
        )
        .route(
            "/api/payments/{reference}/verify",
            put(payments::verify_payment),
        )
        .route(
            "/api/user/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone());

    let admin = Router::new()
        .route(
            "/api/admin/members",
            get(members::admin_list_members).post(members::admin_create_member),
        )
        .route(
            "/api/admin/members/{id}",
            patch(members::admin_update_member).delete(members::admin_delete_member),
        )
        .route("/api/admin/events", post(events::admin_create_event))
        .route(
            "/api/admin/events/{id}",
            patch(events::admin_update_event).delete(events::admin_delete_event),
        )
        .route(
            "/api/admin/events/{id}/registrations",
            get(events::admin_list_registrations),
        )
        .route("/api/admin/resources", post(resources::admin_create_resource))
        .route(
            "/api/admin/resources/{id}",
            patch(resources::admin_update_resource).delete(resources::admin_delete_resource),
        )
        .route(
            "/api/admin/announcements",
            post(announcements::admin_create_announcement),
        )
        .route(
            "/api/admin/announcements/{id}",
            patch(announcements::admin_update_announcement)
                .delete(announcements::admin_delete_announcement),
        )
        .route(
            "/api/admin/contact-messages",
            get(contact::admin_list_messages),
        )
        .route(
            "/api/admin/contact-messages/{id}",
            patch(contact::admin_update_message).delete(contact::admin_delete_message),
        )
        .route("/api/admin/payments", get(payments::admin_list_payments))
        .route(
            "/api/admin/payments/{id}",
            patch(payments::admin_update_payment),
        )
        .layer(from_fn_with_state(state.clone(), require_admin))
        .with_state(state);

    Router::new().merge(public).merge(authenticated).merge(admin)
}

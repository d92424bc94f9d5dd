use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{PaymentStatus, Role, User};

// -- Errors --

/// One failed validation check on a request body. Canonical definition
/// lives here so the server's error responses and the client's decoding
/// share a single shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

// -- Profile --

/// Self-service profile update. `password` and `role` are not fields of
/// this struct, so a member cannot escalate through the profile endpoint;
/// unknown keys in the body are dropped rather than rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

// -- Members --

/// Public roster projection: everything sensitive stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMember {
    pub id: i64,
    pub full_name: String,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

impl From<&User> for PublicMember {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            specialty: user.specialty.clone(),
            year_elevated: user.year_elevated.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateMemberRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Option<Role>,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateMemberRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

// -- Events --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub time: String,
    pub image: Option<String>,
    #[serde(default)]
    pub is_past: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub is_past: Option<bool>,
}

// -- Resources --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_url: Option<String>,
    pub thumbnail: Option<String>,
}

// -- Announcements --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_important: bool,
    pub link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub is_important: Option<bool>,
    pub link: Option<String>,
}

// -- Payments --

/// Client-supplied `status` and `reference` are deliberately absent: the
/// server generates the reference and every new payment starts Pending.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub amount: i64,
    pub purpose: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

// -- Contact --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateContactMessageRequest {
    pub is_read: bool,
}

// -- Generic responses --

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
}

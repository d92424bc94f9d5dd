use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Successful,
    Failed,
    Refunded,
}

/// The password field holds the argon2 hash and is never serialized —
/// every JSON projection of a user omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    /// Free-text display time, e.g. "9:00 AM - 5:00 PM".
    pub time: String,
    pub image: Option<String>,
    pub is_past: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    pub id: i64,
    pub event_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Free category string: General, Event, News, Update, Important, Urgent.
    #[serde(rename = "type")]
    pub kind: String,
    pub is_important: bool,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub purpose: String,
    /// Server-generated `PAY-<millis>-<digits>` transaction reference.
    pub reference: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

// ── Insert types ────────────────────────────────────────────────────────
// Store inputs: everything but the id and created_at the store assigns.

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Argon2 hash — hashing happens at the route layer, never in the store.
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub time: String,
    pub image: Option<String>,
    pub is_past: bool,
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub event_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub kind: String,
    pub is_important: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: i64,
    pub amount: i64,
    pub purpose: String,
    pub reference: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// ── Patch types ─────────────────────────────────────────────────────────
// Typed partial updates: a `None` field leaves the record unchanged. The
// route layer decides which fields a caller may touch; the store merges
// whatever it is handed.

#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub specialty: Option<String>,
    pub year_elevated: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub is_past: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourcePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file_url: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<String>,
    pub is_important: Option<bool>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactMessagePatch {
    pub is_read: Option<bool>,
}

pub mod queries;
pub mod seed;

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use bosan_types::models::{
    Announcement, ContactMessage, Event, EventRegistration, Payment, Resource, User,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Username is already taken")]
    DuplicateUsername,
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("Already registered for this event")]
    DuplicateRegistration,
}

/// Every table lives behind one lock, so each store operation — including
/// the check-then-act sequences like uniqueness checks and
/// insert-if-absent registration — runs atomically.
pub struct Store {
    tables: Mutex<Tables>,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub users: HashMap<i64, User>,
    pub events: HashMap<i64, Event>,
    pub resources: HashMap<i64, Resource>,
    pub payments: HashMap<i64, Payment>,
    pub announcements: HashMap<i64, Announcement>,
    pub event_registrations: HashMap<i64, EventRegistration>,
    pub contact_messages: HashMap<i64, ContactMessage>,

    pub user_id_counter: i64,
    pub event_id_counter: i64,
    pub resource_id_counter: i64,
    pub payment_id_counter: i64,
    pub announcement_id_counter: i64,
    pub event_registration_id_counter: i64,
    pub contact_message_id_counter: i64,
}

impl Tables {
    /// Next id from a per-entity monotonic counter, starting at 1.
    pub fn next_id(counter: &mut i64) -> i64 {
        *counter += 1;
        *counter
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
        }
    }

    pub(crate) fn with_tables<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Tables) -> T,
    {
        // Tables are plain data, so a poisoned lock still holds a usable
        // state; recover it rather than propagating the panic.
        let mut tables = self
            .tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut tables)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

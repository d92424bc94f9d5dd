use chrono::Utc;

use bosan_types::models::{
    Announcement, AnnouncementPatch, ContactMessage, ContactMessagePatch, Event, EventPatch,
    EventRegistration, NewAnnouncement, NewContactMessage, NewEvent, NewPayment, NewRegistration,
    NewResource, NewUser, Payment, PaymentPatch, Resource, ResourcePatch, User, UserPatch,
};

use crate::{Store, StoreError, Tables};

impl Store {
    // -- Users --

    pub fn get_user(&self, id: i64) -> Option<User> {
        self.with_tables(|t| t.users.get(&id).cloned())
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.with_tables(|t| {
            t.users
                .values()
                .find(|u| u.username.eq_ignore_ascii_case(username))
                .cloned()
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.with_tables(|t| {
            t.users
                .values()
                .find(|u| u.email.eq_ignore_ascii_case(email))
                .cloned()
        })
    }

    pub fn get_users(&self) -> Vec<User> {
        self.with_tables(|t| {
            let mut users: Vec<User> = t.users.values().cloned().collect();
            users.sort_by_key(|u| u.id);
            users
        })
    }

    /// Uniqueness is checked and the row inserted under the same lock, so
    /// two concurrent creates cannot both claim a username or email.
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        self.with_tables(|t| {
            if t.users
                .values()
                .any(|u| u.username.eq_ignore_ascii_case(&new.username))
            {
                return Err(StoreError::DuplicateUsername);
            }
            if t.users
                .values()
                .any(|u| u.email.eq_ignore_ascii_case(&new.email))
            {
                return Err(StoreError::DuplicateEmail);
            }

            let id = Tables::next_id(&mut t.user_id_counter);
            let user = User {
                id,
                username: new.username,
                email: new.email,
                password: new.password,
                full_name: new.full_name,
                role: new.role,
                specialty: new.specialty,
                year_elevated: new.year_elevated,
                profile_image: new.profile_image,
                created_at: Utc::now(),
            };
            t.users.insert(id, user.clone());
            Ok(user)
        })
    }

    pub fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, StoreError> {
        self.with_tables(|t| {
            if !t.users.contains_key(&id) {
                return Err(StoreError::NotFound("User"));
            }

            if let Some(username) = &patch.username {
                if t.users
                    .values()
                    .any(|u| u.id != id && u.username.eq_ignore_ascii_case(username))
                {
                    return Err(StoreError::DuplicateUsername);
                }
            }
            if let Some(email) = &patch.email {
                if t.users
                    .values()
                    .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email))
                {
                    return Err(StoreError::DuplicateEmail);
                }
            }

            let user = t.users.get_mut(&id).ok_or(StoreError::NotFound("User"))?;
            if let Some(username) = patch.username {
                user.username = username;
            }
            if let Some(email) = patch.email {
                user.email = email;
            }
            if let Some(password) = patch.password {
                user.password = password;
            }
            if let Some(full_name) = patch.full_name {
                user.full_name = full_name;
            }
            if let Some(role) = patch.role {
                user.role = role;
            }
            if let Some(specialty) = patch.specialty {
                user.specialty = Some(specialty);
            }
            if let Some(year_elevated) = patch.year_elevated {
                user.year_elevated = Some(year_elevated);
            }
            if let Some(profile_image) = patch.profile_image {
                user.profile_image = Some(profile_image);
            }
            Ok(user.clone())
        })
    }

    /// Removes the user and their event registrations. Payments are kept
    /// as immutable financial history.
    pub fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        self.with_tables(|t| {
            if t.users.remove(&id).is_none() {
                return Err(StoreError::NotFound("User"));
            }
            t.event_registrations.retain(|_, r| r.user_id != id);
            Ok(())
        })
    }

    // -- Events --

    pub fn get_event(&self, id: i64) -> Option<Event> {
        self.with_tables(|t| t.events.get(&id).cloned())
    }

    pub fn get_events(&self) -> Vec<Event> {
        self.with_tables(|t| {
            let mut events: Vec<Event> = t.events.values().cloned().collect();
            events.sort_by_key(|e| e.id);
            events
        })
    }

    pub fn get_upcoming_events(&self) -> Vec<Event> {
        self.with_tables(|t| {
            let mut events: Vec<Event> = t.events.values().filter(|e| !e.is_past).cloned().collect();
            events.sort_by_key(|e| e.date);
            events
        })
    }

    pub fn get_past_events(&self) -> Vec<Event> {
        self.with_tables(|t| {
            let mut events: Vec<Event> = t.events.values().filter(|e| e.is_past).cloned().collect();
            events.sort_by_key(|e| std::cmp::Reverse(e.date));
            events
        })
    }

    pub fn create_event(&self, new: NewEvent) -> Event {
        self.with_tables(|t| {
            let id = Tables::next_id(&mut t.event_id_counter);
            let event = Event {
                id,
                title: new.title,
                description: new.description,
                date: new.date,
                venue: new.venue,
                time: new.time,
                image: new.image,
                is_past: new.is_past,
                created_at: Utc::now(),
            };
            t.events.insert(id, event.clone());
            event
        })
    }

    pub fn update_event(&self, id: i64, patch: EventPatch) -> Result<Event, StoreError> {
        self.with_tables(|t| {
            let event = t.events.get_mut(&id).ok_or(StoreError::NotFound("Event"))?;
            if let Some(title) = patch.title {
                event.title = title;
            }
            if let Some(description) = patch.description {
                event.description = description;
            }
            if let Some(date) = patch.date {
                event.date = date;
            }
            if let Some(venue) = patch.venue {
                event.venue = venue;
            }
            if let Some(time) = patch.time {
                event.time = time;
            }
            if let Some(image) = patch.image {
                event.image = Some(image);
            }
            if let Some(is_past) = patch.is_past {
                event.is_past = is_past;
            }
            Ok(event.clone())
        })
    }

    /// Removes the event and every registration that points at it.
    pub fn delete_event(&self, id: i64) -> Result<(), StoreError> {
        self.with_tables(|t| {
            if t.events.remove(&id).is_none() {
                return Err(StoreError::NotFound("Event"));
            }
            t.event_registrations.retain(|_, r| r.event_id != id);
            Ok(())
        })
    }

    // -- Event registrations --

    pub fn get_event_registration(&self, id: i64) -> Option<EventRegistration> {
        self.with_tables(|t| t.event_registrations.get(&id).cloned())
    }

    pub fn get_event_registrations(&self, event_id: i64) -> Vec<EventRegistration> {
        self.with_tables(|t| {
            let mut regs: Vec<EventRegistration> = t
                .event_registrations
                .values()
                .filter(|r| r.event_id == event_id)
                .cloned()
                .collect();
            regs.sort_by_key(|r| r.id);
            regs
        })
    }

    pub fn get_user_event_registrations(&self, user_id: i64) -> Vec<EventRegistration> {
        self.with_tables(|t| {
            let mut regs: Vec<EventRegistration> = t
                .event_registrations
                .values()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect();
            regs.sort_by_key(|r| r.id);
            regs
        })
    }

    /// Insert-if-absent: the duplicate check and the insert happen under
    /// one lock, so racing registrations for the same (event, user) pair
    /// cannot both succeed.
    pub fn create_event_registration(
        &self,
        new: NewRegistration,
    ) -> Result<EventRegistration, StoreError> {
        self.with_tables(|t| {
            if t.event_registrations
                .values()
                .any(|r| r.event_id == new.event_id && r.user_id == new.user_id)
            {
                return Err(StoreError::DuplicateRegistration);
            }

            let id = Tables::next_id(&mut t.event_registration_id_counter);
            let registration = EventRegistration {
                id,
                event_id: new.event_id,
                user_id: new.user_id,
                created_at: Utc::now(),
            };
            t.event_registrations.insert(id, registration.clone());
            Ok(registration)
        })
    }

    // -- Resources --

    pub fn get_resource(&self, id: i64) -> Option<Resource> {
        self.with_tables(|t| t.resources.get(&id).cloned())
    }

    pub fn get_resources(&self) -> Vec<Resource> {
        self.with_tables(|t| {
            let mut resources: Vec<Resource> = t.resources.values().cloned().collect();
            resources.sort_by_key(|r| r.id);
            resources
        })
    }

    pub fn create_resource(&self, new: NewResource) -> Resource {
        self.with_tables(|t| {
            let id = Tables::next_id(&mut t.resource_id_counter);
            let resource = Resource {
                id,
                title: new.title,
                description: new.description,
                category: new.category,
                file_url: new.file_url,
                thumbnail: new.thumbnail,
                created_at: Utc::now(),
            };
            t.resources.insert(id, resource.clone());
            resource
        })
    }

    pub fn update_resource(&self, id: i64, patch: ResourcePatch) -> Result<Resource, StoreError> {
        self.with_tables(|t| {
            let resource = t
                .resources
                .get_mut(&id)
                .ok_or(StoreError::NotFound("Resource"))?;
            if let Some(title) = patch.title {
                resource.title = title;
            }
            if let Some(description) = patch.description {
                resource.description = description;
            }
            if let Some(category) = patch.category {
                resource.category = category;
            }
            if let Some(file_url) = patch.file_url {
                resource.file_url = file_url;
            }
            if let Some(thumbnail) = patch.thumbnail {
                resource.thumbnail = Some(thumbnail);
            }
            Ok(resource.clone())
        })
    }

    pub fn delete_resource(&self, id: i64) -> Result<(), StoreError> {
        self.with_tables(|t| {
            t.resources
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound("Resource"))
        })
    }

    // -- Payments --

    pub fn get_payment(&self, id: i64) -> Option<Payment> {
        self.with_tables(|t| t.payments.get(&id).cloned())
    }

    pub fn get_payment_by_reference(&self, reference: &str) -> Option<Payment> {
        self.with_tables(|t| {
            t.payments
                .values()
                .find(|p| p.reference == reference)
                .cloned()
        })
    }

    pub fn get_user_payments(&self, user_id: i64) -> Vec<Payment> {
        self.with_tables(|t| {
            let mut payments: Vec<Payment> = t
                .payments
                .values()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect();
            // Newest first; id breaks ties between same-instant rows.
            payments.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
            payments
        })
    }

    /// Every user's payments in one list, newest first. Linear over the
    /// whole table; there is no pagination, matching the admin dashboard
    /// it serves.
    pub fn get_all_payments(&self) -> Vec<Payment> {
        self.with_tables(|t| {
            let mut payments: Vec<Payment> = t.payments.values().cloned().collect();
            payments.sort_by_key(|p| std::cmp::Reverse((p.created_at, p.id)));
            payments
        })
    }

    pub fn create_payment(&self, new: NewPayment) -> Payment {
        self.with_tables(|t| {
            let id = Tables::next_id(&mut t.payment_id_counter);
            let payment = Payment {
                id,
                user_id: new.user_id,
                amount: new.amount,
                purpose: new.purpose,
                reference: new.reference,
                status: new.status,
                created_at: Utc::now(),
            };
            t.payments.insert(id, payment.clone());
            payment
        })
    }

    pub fn update_payment(&self, id: i64, patch: PaymentPatch) -> Result<Payment, StoreError> {
        self.with_tables(|t| {
            let payment = t
                .payments
                .get_mut(&id)
                .ok_or(StoreError::NotFound("Payment"))?;
            if let Some(status) = patch.status {
                payment.status = status;
            }
            Ok(payment.clone())
        })
    }

    // -- Announcements --

    pub fn get_announcement(&self, id: i64) -> Option<Announcement> {
        self.with_tables(|t| t.announcements.get(&id).cloned())
    }

    pub fn get_announcements(&self) -> Vec<Announcement> {
        self.with_tables(|t| {
            let mut announcements: Vec<Announcement> = t.announcements.values().cloned().collect();
            announcements.sort_by_key(|a| std::cmp::Reverse((a.created_at, a.id)));
            announcements
        })
    }

    pub fn create_announcement(&self, new: NewAnnouncement) -> Announcement {
        self.with_tables(|t| {
            let id = Tables::next_id(&mut t.announcement_id_counter);
            let announcement = Announcement {
                id,
                title: new.title,
                content: new.content,
                kind: new.kind,
                is_important: new.is_important,
                link: new.link,
                created_at: Utc::now(),
            };
            t.announcements.insert(id, announcement.clone());
            announcement
        })
    }

    pub fn update_announcement(
        &self,
        id: i64,
        patch: AnnouncementPatch,
    ) -> Result<Announcement, StoreError> {
        self.with_tables(|t| {
            let announcement = t
                .announcements
                .get_mut(&id)
                .ok_or(StoreError::NotFound("Announcement"))?;
            if let Some(title) = patch.title {
                announcement.title = title;
            }
            if let Some(content) = patch.content {
                announcement.content = content;
            }
            if let Some(kind) = patch.kind {
                announcement.kind = kind;
            }
            if let Some(is_important) = patch.is_important {
                announcement.is_important = is_important;
            }
            if let Some(link) = patch.link {
                announcement.link = Some(link);
            }
            Ok(announcement.clone())
        })
    }

    pub fn delete_announcement(&self, id: i64) -> Result<(), StoreError> {
        self.with_tables(|t| {
            t.announcements
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound("Announcement"))
        })
    }

    // -- Contact messages --

    pub fn get_contact_messages(&self) -> Vec<ContactMessage> {
        self.with_tables(|t| {
            let mut messages: Vec<ContactMessage> = t.contact_messages.values().cloned().collect();
            messages.sort_by_key(|m| std::cmp::Reverse((m.created_at, m.id)));
            messages
        })
    }

    pub fn create_contact_message(&self, new: NewContactMessage) -> ContactMessage {
        self.with_tables(|t| {
            let id = Tables::next_id(&mut t.contact_message_id_counter);
            let message = ContactMessage {
                id,
                name: new.name,
                email: new.email,
                subject: new.subject,
                message: new.message,
                is_read: false,
                created_at: Utc::now(),
            };
            t.contact_messages.insert(id, message.clone());
            message
        })
    }

    pub fn update_contact_message(
        &self,
        id: i64,
        patch: ContactMessagePatch,
    ) -> Result<ContactMessage, StoreError> {
        self.with_tables(|t| {
            let message = t
                .contact_messages
                .get_mut(&id)
                .ok_or(StoreError::NotFound("Message"))?;
            if let Some(is_read) = patch.is_read {
                message.is_read = is_read;
            }
            Ok(message.clone())
        })
    }

    pub fn delete_contact_message(&self, id: i64) -> Result<(), StoreError> {
        self.with_tables(|t| {
            t.contact_messages
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound("Message"))
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use bosan_types::models::{PaymentStatus, Role};

    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "hash".to_string(),
            full_name: "Test User".to_string(),
            role: Role::Member,
            specialty: None,
            year_elevated: None,
            profile_image: None,
        }
    }

    fn new_event(title: &str, days_from_now: i64, is_past: bool) -> NewEvent {
        NewEvent {
            title: title.to_string(),
            description: "An event".to_string(),
            date: Utc::now() + Duration::days(days_from_now),
            venue: "Lagos".to_string(),
            time: "9:00 AM".to_string(),
            image: None,
            is_past,
        }
    }

    fn new_payment(user_id: i64, reference: &str) -> NewPayment {
        NewPayment {
            user_id,
            amount: 5000,
            purpose: "dues".to_string(),
            reference: reference.to_string(),
            status: PaymentStatus::Pending,
        }
    }

    #[test]
    fn create_then_get_returns_input_plus_id_and_timestamp() {
        let store = Store::new();
        let created = store.create_user(new_user("john", "john@example.com")).unwrap();

        assert_eq!(created.id, 1);
        let fetched = store.get_user(created.id).unwrap();
        assert_eq!(fetched.username, "john");
        assert_eq!(fetched.email, "john@example.com");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[test]
    fn ids_increment_per_entity() {
        let store = Store::new();
        let u1 = store.create_user(new_user("a", "a@example.com")).unwrap();
        let u2 = store.create_user(new_user("b", "b@example.com")).unwrap();
        let e1 = store.create_event(new_event("E", 1, false));

        assert_eq!((u1.id, u2.id), (1, 2));
        // Event counter is independent of the user counter.
        assert_eq!(e1.id, 1);
    }

    #[test]
    fn username_and_email_lookup_is_case_insensitive() {
        let store = Store::new();
        store.create_user(new_user("John", "John@Example.com")).unwrap();

        assert!(store.get_user_by_username("john").is_some());
        assert!(store.get_user_by_username("JOHN").is_some());
        assert!(store.get_user_by_email("john@example.com").is_some());
        assert!(store.get_user_by_username("johnny").is_none());
    }

    #[test]
    fn duplicate_username_or_email_is_rejected() {
        let store = Store::new();
        store.create_user(new_user("john", "john@example.com")).unwrap();

        let err = store
            .create_user(new_user("JOHN", "other@example.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateUsername);

        let err = store
            .create_user(new_user("other", "JOHN@example.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
    }

    #[test]
    fn update_user_merges_partial_fields() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();

        let updated = store
            .update_user(
                user.id,
                UserPatch {
                    specialty: Some("Maritime Law".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.specialty.as_deref(), Some("Maritime Law"));
        // Untouched fields survive the merge.
        assert_eq!(updated.username, "john");
        assert_eq!(updated.email, "john@example.com");
    }

    #[test]
    fn update_user_rejects_taken_username() {
        let store = Store::new();
        store.create_user(new_user("john", "john@example.com")).unwrap();
        let other = store.create_user(new_user("jane", "jane@example.com")).unwrap();

        let err = store
            .update_user(
                other.id,
                UserPatch {
                    username: Some("JOHN".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateUsername);

        // Re-asserting your own username is not a conflict.
        store
            .update_user(
                other.id,
                UserPatch {
                    username: Some("Jane".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = Store::new();
        assert!(store.get_user(42).is_none());
        assert!(store.get_event(42).is_none());
        assert_eq!(
            store.update_event(42, EventPatch::default()).unwrap_err(),
            StoreError::NotFound("Event")
        );
        assert_eq!(
            store.delete_resource(42).unwrap_err(),
            StoreError::NotFound("Resource")
        );
    }

    #[test]
    fn upcoming_and_past_partition_events() {
        let store = Store::new();
        store.create_event(new_event("far", 60, false));
        store.create_event(new_event("near", 10, false));
        store.create_event(new_event("old", -30, true));
        store.create_event(new_event("older", -60, true));

        let upcoming = store.get_upcoming_events();
        let past = store.get_past_events();

        assert!(upcoming.iter().all(|e| !e.is_past));
        assert!(past.iter().all(|e| e.is_past));
        assert_eq!(upcoming.len() + past.len(), store.get_events().len());

        // Upcoming ascends by date, past descends.
        let titles: Vec<&str> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["near", "far"]);
        let titles: Vec<&str> = past.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["old", "older"]);
    }

    #[test]
    fn duplicate_registration_is_rejected_atomically() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();
        let event = store.create_event(new_event("conf", 30, false));

        store
            .create_event_registration(NewRegistration {
                event_id: event.id,
                user_id: user.id,
            })
            .unwrap();

        let err = store
            .create_event_registration(NewRegistration {
                event_id: event.id,
                user_id: user.id,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateRegistration);

        // A different event is fine.
        let other = store.create_event(new_event("dinner", 45, false));
        store
            .create_event_registration(NewRegistration {
                event_id: other.id,
                user_id: user.id,
            })
            .unwrap();
        assert_eq!(store.get_user_event_registrations(user.id).len(), 2);
    }

    #[test]
    fn deleting_event_cascades_registrations() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();
        let event = store.create_event(new_event("conf", 30, false));
        store
            .create_event_registration(NewRegistration {
                event_id: event.id,
                user_id: user.id,
            })
            .unwrap();

        store.delete_event(event.id).unwrap();
        assert!(store.get_event_registrations(event.id).is_empty());
    }

    #[test]
    fn deleting_user_cascades_registrations_but_keeps_payments() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();
        let event = store.create_event(new_event("conf", 30, false));
        store
            .create_event_registration(NewRegistration {
                event_id: event.id,
                user_id: user.id,
            })
            .unwrap();
        store.create_payment(new_payment(user.id, "PAY-1-100"));

        store.delete_user(user.id).unwrap();

        assert!(store.get_event_registrations(event.id).is_empty());
        // Payment history outlives the account.
        assert_eq!(store.get_user_payments(user.id).len(), 1);
    }

    #[test]
    fn user_payments_are_filtered_and_newest_first() {
        let store = Store::new();
        let john = store.create_user(new_user("john", "john@example.com")).unwrap();
        let jane = store.create_user(new_user("jane", "jane@example.com")).unwrap();

        store.create_payment(new_payment(john.id, "PAY-1-100"));
        store.create_payment(new_payment(jane.id, "PAY-2-200"));
        store.create_payment(new_payment(john.id, "PAY-3-300"));

        let payments = store.get_user_payments(john.id);
        assert_eq!(payments.len(), 2);
        let refs: Vec<&str> = payments.iter().map(|p| p.reference.as_str()).collect();
        assert_eq!(refs, ["PAY-3-300", "PAY-1-100"]);

        let all = store.get_all_payments();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].reference, "PAY-3-300");
    }

    #[test]
    fn payment_lookup_by_reference() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();
        store.create_payment(new_payment(user.id, "PAY-1700000000000-123"));

        let found = store.get_payment_by_reference("PAY-1700000000000-123").unwrap();
        assert_eq!(found.status, PaymentStatus::Pending);
        assert!(store.get_payment_by_reference("PAY-0-000").is_none());
    }

    #[test]
    fn payment_status_transition() {
        let store = Store::new();
        let user = store.create_user(new_user("john", "john@example.com")).unwrap();
        let payment = store.create_payment(new_payment(user.id, "PAY-1-100"));

        let updated = store
            .update_payment(
                payment.id,
                PaymentPatch {
                    status: Some(PaymentStatus::Successful),
                },
            )
            .unwrap();
        assert_eq!(updated.status, PaymentStatus::Successful);
    }

    #[test]
    fn announcements_are_newest_first() {
        let store = Store::new();
        store.create_announcement(NewAnnouncement {
            title: "first".to_string(),
            content: "one".to_string(),
            kind: "General".to_string(),
            is_important: false,
            link: None,
        });
        store.create_announcement(NewAnnouncement {
            title: "second".to_string(),
            content: "two".to_string(),
            kind: "Urgent".to_string(),
            is_important: true,
            link: None,
        });

        let announcements = store.get_announcements();
        assert_eq!(announcements[0].title, "second");
        assert_eq!(announcements[1].title, "first");
    }

    #[test]
    fn contact_messages_start_unread_and_can_be_marked() {
        let store = Store::new();
        let msg = store.create_contact_message(NewContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A question".to_string(),
        });
        assert!(!msg.is_read);

        let updated = store
            .update_contact_message(
                msg.id,
                ContactMessagePatch {
                    is_read: Some(true),
                },
            )
            .unwrap();
        assert!(updated.is_read);

        store.delete_contact_message(msg.id).unwrap();
        assert!(store.get_contact_messages().is_empty());
    }
}

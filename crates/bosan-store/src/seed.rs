use chrono::{Duration, Utc};
use tracing::info;

use bosan_types::models::{NewAnnouncement, NewEvent, NewResource};

use crate::Store;

/// Populate a fresh store with the starter content the site ships with.
/// The store is volatile, so this runs on every process start.
pub fn seed(store: &Store) {
    store.create_announcement(NewAnnouncement {
        title: "Annual Conference 2023".to_string(),
        content: "Registration for the 2023 Annual Conference is now open. Early bird \
                  registration ends on June 30th, 2023."
            .to_string(),
        kind: "General".to_string(),
        is_important: false,
        link: None,
    });

    let now = Utc::now();

    store.create_event(NewEvent {
        title: "Annual Legal Conference 2023".to_string(),
        description: "Join us for the premier gathering of legal professionals in Nigeria. \
                      Featuring keynote speakers and panel discussions on emerging legal trends."
            .to_string(),
        date: now + Duration::days(30),
        venue: "Eko Hotels & Suites, Lagos".to_string(),
        time: "9:00 AM - 5:00 PM".to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80"
                .to_string(),
        ),
        is_past: false,
    });

    store.create_event(NewEvent {
        title: "Legal Practice Management Workshop".to_string(),
        description: "A comprehensive workshop on modern legal practice management, technology \
                      integration, and client relations."
            .to_string(),
        date: now + Duration::days(45),
        venue: "Transcorp Hilton, Abuja".to_string(),
        time: "10:00 AM - 3:00 PM".to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80"
                .to_string(),
        ),
        is_past: false,
    });

    store.create_event(NewEvent {
        title: "BOSAN Annual Dinner & Awards".to_string(),
        description: "A prestigious evening recognizing outstanding contributions to the legal \
                      profession. Black tie required."
            .to_string(),
        date: now + Duration::days(60),
        venue: "Oriental Hotel, Lagos".to_string(),
        time: "6:00 PM - 10:00 PM".to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1575505586569-646b2ca898fc?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=80"
                .to_string(),
        ),
        is_past: false,
    });

    store.create_resource(NewResource {
        title: "Code of Conduct for Legal Practitioners".to_string(),
        description: "Guidelines for professional conduct of legal practitioners in Nigeria"
            .to_string(),
        category: "document".to_string(),
        file_url: "/resources/code-of-conduct.pdf".to_string(),
        thumbnail: None,
    });

    store.create_resource(NewResource {
        title: "Supreme Court Practice Directions".to_string(),
        description: "Updated practice directions for the Supreme Court of Nigeria".to_string(),
        category: "document".to_string(),
        file_url: "/resources/supreme-court-directions.pdf".to_string(),
        thumbnail: None,
    });

    info!("Seeded starter announcements, events and resources");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_populates_starter_content() {
        let store = Store::new();
        seed(&store);

        assert_eq!(store.get_announcements().len(), 1);
        assert_eq!(store.get_upcoming_events().len(), 3);
        assert!(store.get_past_events().is_empty());
        assert_eq!(store.get_resources().len(), 2);
        // No accounts are seeded.
        assert!(store.get_users().is_empty());
    }
}

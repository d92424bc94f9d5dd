use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Session {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// Server-side session state, keyed by the opaque id carried in the
/// session cookie. Volatile across restarts, like everything else here.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
                ttl: chrono::Duration::hours(ttl_hours),
            }),
        }
    }

    /// Establish a session for a user and return its opaque id.
    pub async fn create(&self, user_id: i64) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session {
            user_id,
            expires_at: Utc::now() + self.inner.ttl,
        };
        self.inner.sessions.write().await.insert(id, session);
        id
    }

    /// Resolve a session id to its user. Expired sessions read as absent;
    /// the prune loop removes them.
    pub async fn get(&self, id: Uuid) -> Option<i64> {
        let sessions = self.inner.sessions.read().await;
        let session = sessions.get(&id)?;
        if session.expires_at <= Utc::now() {
            return None;
        }
        Some(session.user_id)
    }

    pub async fn destroy(&self, id: Uuid) {
        self.inner.sessions.write().await.remove(&id);
    }

    /// Drop every expired session. Returns how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let mut sessions = self.inner.sessions.write().await;
        let before = sessions.len();
        let now = Utc::now();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }
}

/// Background task that prunes expired sessions on an interval.
pub async fn run_prune_loop(sessions: SessionStore, interval_secs: u64) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;

        let pruned = sessions.prune_expired().await;
        if pruned > 0 {
            info!("Pruned {} expired sessions", pruned);
        }
    }
}

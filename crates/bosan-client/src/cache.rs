use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Route-keyed response cache. An entry is either fresh (served as-is) or
/// stale, which forces a refetch on the next read of that key.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    value: Value,
    stale: bool,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // Entries are plain data; a poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn get_fresh(&self, key: &str) -> Option<Value> {
        self.lock()
            .get(key)
            .filter(|e| !e.stale)
            .map(|e| e.value.clone())
    }

    pub fn store(&self, key: &str, value: Value) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                value,
                stale: false,
            },
        );
    }

    /// Mark one key stale. Unknown keys are a no-op.
    pub fn invalidate(&self, key: &str) {
        if let Some(entry) = self.lock().get_mut(key) {
            entry.stale = true;
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

use crate::{Cache, Map};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// An in-process [`Cache`] with optional per-entry expiry.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

#[derive(Debug)]
struct Entry {
    map: Arc<Map>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.lock().values().filter(|entry| entry.is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // A panic while holding the lock cannot leave an entry half-written.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Cache for MemoryCache {
    fn contains(&self, class: &str) -> bool {
        self.fetch(class).is_some()
    }

    fn fetch(&self, class: &str) -> Option<Arc<Map>> {
        let mut entries = self.lock();

        match entries.get(class) {
            Some(entry) if entry.is_live(Instant::now()) => Some(entry.map.clone()),
            Some(_) => {
                entries.remove(class);
                None
            }
            None => None,
        }
    }

    fn save(&self, class: &str, map: Arc<Map>, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.lock()
            .insert(class.to_string(), Entry { map, expires_at });
    }

    fn delete(&self, class: &str) {
        self.lock().remove(class);
    }
}

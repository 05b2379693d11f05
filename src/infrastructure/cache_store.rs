// Session-scoped dataset cache shared by every view-controller of one session
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// The fixed set of cacheable views. Room search and detail lookups are keyed
/// by user input and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Dashboard,
    Scheduled,
    Upcoming,
    WeeklyAi,
}

impl CacheKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::Dashboard => "dashboard",
            CacheKey::Scheduled => "scheduled",
            CacheKey::Upcoming => "upcoming",
            CacheKey::WeeklyAi => "weekly-ai",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized view datasets keyed by view. Clones share the same entries.
///
/// Entries live as long as the session that owns the store; nothing is evicted
/// or invalidated. A missing, undecodable, or unreachable entry reads as a miss.
///
/// Reads go back through the same lenient decoders as backend replies, so a
/// dataset decoded from the backend comes back unchanged, floats included. A
/// record built by hand with a sentinel text such as `"N/A"` or `""` reads back
/// with that field absent.
#[derive(Debug, Clone, Default)]
pub struct CacheStore {
    entries: Arc<RwLock<HashMap<&'static str, String>>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, key: CacheKey) -> Option<T> {
        let entries = self.entries.read().ok()?;
        let payload = entries.get(key.as_str())?;
        match serde_json::from_str(payload) {
            Ok(dataset) => {
                tracing::debug!("Cache hit for {}", key);
                Some(dataset)
            }
            Err(e) => {
                tracing::warn!("Discarding corrupt cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub fn put<T: Serialize>(&self, key: CacheKey, dataset: &T) {
        let payload = match serde_json::to_string(dataset) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Could not serialise dataset for {}: {}", key, e);
                return;
            }
        };
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key.as_str(), payload);
                tracing::debug!("Cached dataset for {}", key);
            }
            Err(_) => tracing::warn!("Cache lock poisoned, dropping write for {}", key),
        }
    }

    pub fn contains(&self, key: CacheKey) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key.as_str()))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub(crate) fn put_raw(&self, key: CacheKey, payload: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.as_str(), payload.to_string());
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashMap;

pub(crate) struct CacheEntry<T> {
    pub value: Arc<T>,
    pub last_access: Duration,
    // Breaks ties between entries touched at the same clock reading.
    pub sequence: u64,
}

/// Key/value storage for one resource kind.
pub(crate) struct Store<T> {
    entries: FxHashMap<String, CacheEntry<T>>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<T> Store<T> {
    /// Lookup that refreshes the entry's access stamp.
    pub fn touch(&mut self, key: &str, now: Duration, sequence: u64) -> Option<Arc<T>> {
        let entry = self.entries.get_mut(key)?;
        entry.last_access = now;
        entry.sequence = sequence;
        Some(entry.value.clone())
    }

    pub fn peek(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).map(|e| e.value.clone())
    }

    pub fn insert(&mut self, key: &str, value: Arc<T>, now: Duration, sequence: u64) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                last_access: now,
                sequence,
            },
        );
    }

    pub fn remove(&mut self, key: &str) -> Option<Arc<T>> {
        self.entries.remove(key).map(|e| e.value)
    }

    /// Drops entries idle for strictly longer than `ttl`.
    pub fn expire(&mut self, now: Duration, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, e| now.saturating_sub(e.last_access) <= ttl);
        before - self.entries.len()
    }

    /// `(last_access, sequence, key)` for every entry.
    pub fn ages(&self) -> impl Iterator<Item = (Duration, u64, &str)> {
        self.entries
            .iter()
            .map(|(k, e)| (e.last_access, e.sequence, k.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.values().map(|e| &e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single member of the cluster: an independently addressable local store.
///
/// The node is exclusively owned by the coordinator's registry and holds no
/// reference back to it. All operations are internally thread-safe so that
/// concurrent callers need no external locking.
pub struct CacheNode<V> {
    pub id: NodeId,
    data: DashMap<String, V>,
    active: AtomicBool,
    last_touched_ms: AtomicU64,
}

impl<V> CacheNode<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            data: DashMap::new(),
            active: AtomicBool::new(true),
            last_touched_ms: AtomicU64::new(now_ms()),
        }
    }

    fn touch(&self) {
        self.last_touched_ms.store(now_ms(), Ordering::Relaxed);
    }

    /// Inserts or overwrites a key locally. Never fails.
    pub fn put(&self, key: String, value: V) {
        self.touch();
        self.data.insert(key, value);
    }

    /// Returns the stored value, if any. Refreshes the last-touched
    /// timestamp even on a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        self.touch();
        self.data.get(key).map(|entry| entry.value().clone())
    }

    /// Deletes the key if present and returns the prior value.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.touch();
        self.data.remove(key).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn mark_active(&self) {
        self.active.store(true, Ordering::Relaxed);
    }

    pub fn mark_inactive(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn last_touched_ms(&self) -> u64 {
        self.last_touched_ms.load(Ordering::Relaxed)
    }

    pub fn key_count(&self) -> usize {
        self.data.len()
    }

    /// Snapshot of every key/value pair held locally. Used by the
    /// coordinator for key migration and rebalancing.
    pub fn entries(&self) -> Vec<(String, V)> {
        self.data
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Drops all local data. The activity flag is left as-is.
    pub fn clear(&self) {
        self.data.clear();
    }
}

impl<V> Default for CacheNode<V>
where
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

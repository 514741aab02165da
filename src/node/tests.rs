//! Node Module Tests
//!
//! Validates the local store mechanics of a single cache node.
//!
//! ## Test Scopes
//! - **Identity**: Ensures node IDs are unique and hashable.
//! - **Local Store**: Put/Get/Remove/Contains semantics, including overwrites.
//! - **Lifecycle**: Activity flag toggling and last-touched bookkeeping.

#[cfg(test)]
mod tests {
    use crate::node::store::{CacheNode, NodeId};

    // ============================================================
    // NODE ID TESTS
    // ============================================================

    #[test]
    fn test_node_id_is_unique() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();

        assert_ne!(id1, id2, "Each NodeId should be unique");
    }

    #[test]
    fn test_node_id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        let id1 = NodeId("node-1".to_string());
        let id2 = NodeId("node-1".to_string()); // same value
        let id3 = NodeId("node-2".to_string());

        set.insert(id1.clone());
        set.insert(id2); // should not increase size (duplicate)
        set.insert(id3);

        assert_eq!(set.len(), 2, "HashSet should have 2 unique NodeIds");
    }

    // ============================================================
    // LOCAL STORE TESTS
    // ============================================================

    #[test]
    fn test_put_and_get() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("user:1".to_string(), "John".to_string());

        assert_eq!(node.get("user:1"), Some("John".to_string()));
        assert_eq!(node.key_count(), 1);
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let node: CacheNode<String> = CacheNode::new();

        assert_eq!(node.get("nonexistent"), None);
    }

    #[test]
    fn test_put_overwrites_value() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("k".to_string(), "first".to_string());
        node.put("k".to_string(), "second".to_string());

        assert_eq!(node.get("k"), Some("second".to_string()));
        assert_eq!(node.key_count(), 1, "Overwrite should not add a key");
    }

    #[test]
    fn test_remove_returns_prior_value() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("k".to_string(), "v".to_string());

        assert_eq!(node.remove("k"), Some("v".to_string()));
        assert_eq!(node.remove("k"), None, "Second remove should find nothing");
        assert!(!node.contains_key("k"));
    }

    #[test]
    fn test_contains_key() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("present".to_string(), "v".to_string());

        assert!(node.contains_key("present"));
        assert!(!node.contains_key("absent"));
    }

    #[test]
    fn test_entries_snapshot() {
        let node: CacheNode<String> = CacheNode::new();

        for i in 0..10 {
            node.put(format!("key-{}", i), format!("value-{}", i));
        }

        let mut entries = node.entries();
        entries.sort();

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0], ("key-0".to_string(), "value-0".to_string()));
    }

    #[test]
    fn test_clear_drops_all_data() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("a".to_string(), "1".to_string());
        node.put("b".to_string(), "2".to_string());
        node.clear();

        assert_eq!(node.key_count(), 0);
        assert_eq!(node.get("a"), None);
    }

    // ============================================================
    // LIFECYCLE TESTS
    // ============================================================

    #[test]
    fn test_activity_flag_toggles() {
        let node: CacheNode<String> = CacheNode::new();

        assert!(node.is_active(), "New nodes start active");

        node.mark_inactive();
        assert!(!node.is_active());

        node.mark_active();
        assert!(node.is_active());
    }

    #[test]
    fn test_inactive_node_keeps_data() {
        let node: CacheNode<String> = CacheNode::new();

        node.put("k".to_string(), "v".to_string());
        node.mark_inactive();

        // Data survives deactivation; the flag only affects selection.
        assert_eq!(node.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_get_refreshes_last_touched_even_on_miss() {
        let node: CacheNode<String> = CacheNode::new();

        let before = node.last_touched_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));

        node.get("no-such-key");

        assert!(
            node.last_touched_ms() > before,
            "A miss still counts as a read"
        );
    }
}

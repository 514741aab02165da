use crate::node::store::NodeId;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hashes a key to the index space used for placement.
pub fn key_hash(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Selects the holder set for a key over the current active-node list.
///
/// Returns the primary first, then the replica (when `active_nodes` has more
/// than one entry). An empty active list yields an empty holder set. The
/// caller is expected to pass the active list in a stable order (the
/// coordinator sorts node ids) so placement is deterministic.
pub fn select_nodes_for_key(key: &str, active_nodes: &[NodeId]) -> Vec<NodeId> {
    let n = active_nodes.len();
    if n == 0 {
        return vec![];
    }

    let hash = key_hash(key) as usize;
    let primary_idx = hash % n;

    if n == 1 {
        return vec![active_nodes[primary_idx].clone()];
    }

    let replica_idx = (hash + 1) % n;
    vec![
        active_nodes[primary_idx].clone(),
        active_nodes[replica_idx].clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_hash_deterministic() {
        let h1 = key_hash("book_100");
        let h2 = key_hash("book_100");
        assert_eq!(h1, h2);

        println!("book_100 -> hash {}", h1);
    }
}

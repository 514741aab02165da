use crate::consistency::resolver::{resolve, ReadStrategy};
use crate::node::store::{CacheNode, NodeId};
use crate::partition::selector::select_nodes_for_key;

use dashmap::DashMap;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The central component managing cluster state.
///
/// All cross-node coordination happens here: nodes themselves never talk to
/// each other and hold no reference back to the coordinator.
pub struct CacheCoordinator<V> {
    /// The cluster registry. Node ids are unique for the cluster's lifetime.
    registry: DashMap<NodeId, Arc<CacheNode<V>>>,

    /// The distribution table: `key -> holder set`, primary first.
    distribution: DashMap<String, Vec<NodeId>>,

    /// Process-wide read strategy; affects only the read path.
    strategy: RwLock<ReadStrategy>,

    /// Held shared by put/get/add, exclusively by remove_node/rebalance.
    /// The rewrite sequences assume no concurrent mutation.
    churn_gate: RwLock<()>,
}

impl<V> CacheCoordinator<V>
where
    V: Clone + PartialEq + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            registry: DashMap::new(),
            distribution: DashMap::new(),
            strategy: RwLock::new(ReadStrategy::Eventual),
            churn_gate: RwLock::new(()),
        }
    }

    /// Creates a new active node and adds it to the registry.
    ///
    /// Existing keys are *not* proactively rebalanced onto the new node;
    /// call [`rebalance`](Self::rebalance) for that.
    pub async fn add_node(&self) -> NodeId {
        let _gate = self.churn_gate.read().await;

        let node = Arc::new(CacheNode::new());
        let id = node.id.clone();
        self.registry.insert(id.clone(), node);

        tracing::info!("Added node {} ({} nodes total)", id, self.registry.len());
        id
    }

    /// Removes a node, migrating every key it holds onto the remaining
    /// active nodes first. Returns `false` if the id is unknown.
    pub async fn remove_node(&self, id: &NodeId) -> bool {
        let _gate = self.churn_gate.write().await;

        let departing = match self.registry.get(id) {
            Some(entry) => entry.value().clone(),
            None => {
                tracing::warn!("removeNode: unknown node id {}", id);
                return false;
            }
        };

        let remaining: Vec<NodeId> = {
            let mut ids: Vec<NodeId> = self
                .registry
                .iter()
                .filter(|entry| entry.key() != id && entry.value().is_active())
                .map(|entry| entry.key().clone())
                .collect();
            ids.sort();
            ids
        };

        let mut migrated = 0usize;
        let mut dropped = 0usize;

        for (key, value) in departing.entries() {
            let holders = select_nodes_for_key(&key, &remaining);
            if holders.is_empty() {
                // Last node leaving: nowhere to migrate to.
                self.distribution.remove(&key);
                dropped += 1;
                continue;
            }

            for holder_id in holders.iter() {
                if let Some(node) = self.registry.get(holder_id) {
                    node.put(key.clone(), value.clone());
                }
            }
            self.distribution.insert(key, holders);
            migrated += 1;
        }

        self.registry.remove(id);

        tracing::info!(
            "Removed node {}: {} keys migrated, {} dropped, {} nodes remain",
            id,
            migrated,
            dropped,
            self.registry.len()
        );
        true
    }

    /// Writes the value to every node in the key's holder set and records
    /// that set in the distribution table.
    ///
    /// With zero active nodes the write silently degrades to a no-op — the
    /// caller sees no error, only a log line.
    pub async fn put(&self, key: String, value: V) {
        let _gate = self.churn_gate.read().await;

        let active = self.active_node_ids();
        if active.is_empty() {
            tracing::warn!("PUT '{}': no active nodes, dropping write", key);
            return;
        }

        let holders = select_nodes_for_key(&key, &active);
        for holder_id in holders.iter() {
            if let Some(node) = self.registry.get(holder_id) {
                node.put(key.clone(), value.clone());
            }
        }

        tracing::debug!("PUT '{}' -> {} holder(s)", key, holders.len());
        self.distribution.insert(key, holders);
    }

    /// Reads the key under the currently selected strategy.
    ///
    /// When the distribution table has an entry, the read is reconciled over
    /// that entry's active holders. When the table lost track of the key
    /// (node churn), the coordinator falls back to a linear scan over all
    /// active nodes and returns the first hit.
    pub async fn get(&self, key: &str) -> Option<V> {
        let _gate = self.churn_gate.read().await;
        let strategy = *self.strategy.read().await;

        let holders = self
            .distribution
            .get(key)
            .map(|entry| entry.value().clone());

        let Some(holders) = holders else {
            return self.scan_active_nodes(key);
        };

        let active_holders: Vec<(NodeId, Arc<CacheNode<V>>)> = holders
            .into_iter()
            .filter_map(|id| {
                self.registry
                    .get(&id)
                    .filter(|entry| entry.value().is_active())
                    .map(|entry| (id, entry.value().clone()))
            })
            .collect();

        // Weak consults only the first holder; the others are not queried
        // (and so their last-touched timestamps stay put).
        let consulted = match strategy {
            ReadStrategy::Weak => active_holders.iter().take(1),
            _ => active_holders.iter().take(active_holders.len()),
        };

        let values_by_holder: Vec<(NodeId, Option<V>)> = consulted
            .map(|(id, node)| (id.clone(), node.get(key)))
            .collect();

        resolve(strategy, key, &values_by_holder)
    }

    fn scan_active_nodes(&self, key: &str) -> Option<V> {
        for id in self.active_node_ids() {
            if let Some(node) = self.registry.get(&id) {
                if let Some(value) = node.get(key) {
                    tracing::debug!("GET '{}': found via full scan on node {}", key, id);
                    return Some(value);
                }
            }
        }
        None
    }

    /// Gathers every key/value pair from the active nodes, wipes all node
    /// stores and the distribution table, then deals the keys back out
    /// round-robin — one holder per key.
    ///
    /// Note: this collapses the replication factor to a single copy per key,
    /// matching the put-path's primary/replica pair only until the next put.
    pub async fn rebalance(&self) {
        let _gate = self.churn_gate.write().await;

        let active = self.active_node_ids();

        // Visit nodes in sorted-id order and keep the first value seen per
        // key, so the merge of diverged replicas is deterministic.
        let mut gathered: HashMap<String, V> = HashMap::new();
        for id in active.iter() {
            if let Some(node) = self.registry.get(id) {
                for (key, value) in node.entries() {
                    gathered.entry(key).or_insert(value);
                }
            }
        }

        for entry in self.registry.iter() {
            entry.value().clear();
        }
        self.distribution.clear();

        if active.is_empty() {
            tracing::warn!("Rebalance with no active nodes: table cleared, nothing to place");
            return;
        }

        let total = gathered.len();
        for (i, (key, value)) in gathered.into_iter().enumerate() {
            let holder_id = &active[i % active.len()];
            if let Some(node) = self.registry.get(holder_id) {
                node.put(key.clone(), value);
            }
            self.distribution.insert(key, vec![holder_id.clone()]);
        }

        tracing::info!(
            "Rebalanced {} keys across {} active nodes",
            total,
            active.len()
        );
    }

    /// Switches the read strategy; takes effect on the next get.
    pub async fn set_strategy(&self, strategy: ReadStrategy) {
        *self.strategy.write().await = strategy;
        tracing::info!("Read strategy set to {}", strategy);
    }

    pub async fn strategy(&self) -> ReadStrategy {
        *self.strategy.read().await
    }

    /// Active node ids in sorted order, so placement and scans are
    /// deterministic for a fixed cluster.
    pub fn active_node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .registry
            .iter()
            .filter(|entry| entry.value().is_active())
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn node(&self, id: &NodeId) -> Option<Arc<CacheNode<V>>> {
        self.registry.get(id).map(|entry| entry.value().clone())
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn active_node_count(&self) -> usize {
        self.active_node_ids().len()
    }

    /// Distinct keys the distribution table is tracking.
    pub fn tracked_key_count(&self) -> usize {
        self.distribution.len()
    }

    /// Total keys stored, summed across every node (replicas count twice).
    pub fn stored_entry_count(&self) -> usize {
        self.registry
            .iter()
            .map(|entry| entry.value().key_count())
            .sum()
    }

    /// Marks a node inactive without removing it; its data stays in place
    /// but placement and read aggregation skip it.
    pub fn deactivate_node(&self, id: &NodeId) -> bool {
        match self.registry.get(id) {
            Some(entry) => {
                entry.value().mark_inactive();
                tracing::info!("Node {} marked inactive", id);
                true
            }
            None => false,
        }
    }

    pub fn activate_node(&self, id: &NodeId) -> bool {
        match self.registry.get(id) {
            Some(entry) => {
                entry.value().mark_active();
                tracing::info!("Node {} marked active", id);
                true
            }
            None => false,
        }
    }

    /// Renders a plain-text summary of the cluster state.
    pub async fn statistics_report(&self) -> String {
        let strategy = *self.strategy.read().await;

        let mut nodes: Vec<Arc<CacheNode<V>>> = self
            .registry
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut report = String::new();
        let _ = writeln!(report, "cluster statistics");
        let _ = writeln!(
            report,
            "  nodes: {} total, {} active",
            nodes.len(),
            nodes.iter().filter(|n| n.is_active()).count()
        );
        let _ = writeln!(report, "  strategy: {}", strategy);
        let _ = writeln!(report, "  tracked keys: {}", self.tracked_key_count());
        let _ = writeln!(report, "  stored entries: {}", self.stored_entry_count());

        for node in nodes {
            let _ = writeln!(
                report,
                "  node {}: {} keys, {}, last_touched_ms={}",
                node.id,
                node.key_count(),
                if node.is_active() { "active" } else { "inactive" },
                node.last_touched_ms()
            );
        }

        report
    }
}

impl<V> Default for CacheCoordinator<V>
where
    V: Clone + PartialEq + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

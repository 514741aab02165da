use crate::node::store::NodeId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The read-reconciliation policy. Selected process-wide on the coordinator;
/// affects only the read path, never the write path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReadStrategy {
    Strong,
    Eventual,
    Weak,
}

impl std::fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadStrategy::Strong => write!(f, "strong"),
            ReadStrategy::Eventual => write!(f, "eventual"),
            ReadStrategy::Weak => write!(f, "weak"),
        }
    }
}

impl FromStr for ReadStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strong" => Ok(ReadStrategy::Strong),
            "eventual" => Ok(ReadStrategy::Eventual),
            "weak" => Ok(ReadStrategy::Weak),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

/// Picks the value a read returns, given the per-holder lookups for a key.
///
/// `values_by_holder` lists the currently active holders in holder-set order
/// (primary first), each paired with what that holder returned. An empty
/// slice means every holder was inactive and the answer is absent under any
/// strategy.
pub fn resolve<V>(
    strategy: ReadStrategy,
    key: &str,
    values_by_holder: &[(NodeId, Option<V>)],
) -> Option<V>
where
    V: Clone + PartialEq,
{
    if values_by_holder.is_empty() {
        return None;
    }

    match strategy {
        ReadStrategy::Strong => resolve_strong(key, values_by_holder),
        ReadStrategy::Eventual => values_by_holder
            .iter()
            .find_map(|(_, value)| value.clone()),
        // Only the first holder was consulted; its answer stands as-is.
        ReadStrategy::Weak => values_by_holder[0].1.clone(),
    }
}

fn resolve_strong<V>(key: &str, values_by_holder: &[(NodeId, Option<V>)]) -> Option<V>
where
    V: Clone + PartialEq,
{
    let present: Vec<(&NodeId, &V)> = values_by_holder
        .iter()
        .filter_map(|(id, value)| value.as_ref().map(|v| (id, v)))
        .collect();

    let (first_id, first_value) = match present.first() {
        Some(found) => *found,
        None => return None,
    };

    let diverged = present.iter().any(|(_, value)| *value != first_value);
    if diverged {
        tracing::warn!(
            "Strong read divergence on key '{}': {} of {} holders disagree, answering with holder {}",
            key,
            present
                .iter()
                .filter(|(_, value)| *value != first_value)
                .count(),
            present.len(),
            first_id
        );
    }

    Some(first_value.clone())
}

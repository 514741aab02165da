//! Coordinator API Protocol
//!
//! Defines the operator-facing endpoints and Data Transfer Objects (DTOs)
//! for the HTTP surface over the coordinator.
//!
//! Values travel as serialized JSON strings (`value_json`) so the handlers
//! stay generic over the stored value type.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint for client write requests.
pub const ENDPOINT_PUT: &str = "/put";
/// Public endpoint for client read requests.
pub const ENDPOINT_GET: &str = "/get";
/// Node churn endpoint: POST adds a node, DELETE removes one.
pub const ENDPOINT_NODES: &str = "/nodes";
/// Triggers a full redistribution of all stored data.
pub const ENDPOINT_REBALANCE: &str = "/rebalance";
/// Selects the process-wide read strategy.
pub const ENDPOINT_STRATEGY: &str = "/strategy";
/// Plain-text cluster statistics.
pub const ENDPOINT_STATS: &str = "/stats";

// --- Data Transfer Objects ---

/// Standard client request for writing data.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutRequest {
    /// The data key.
    pub key: String,
    /// The serialized JSON string of the value.
    pub value_json: String,
}

/// Standard acknowledgment for write operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutResponse {
    pub success: bool,
}

/// Standard response for data retrieval.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    /// The value, if found, serialized as a JSON string.
    /// `None` indicates the key does not exist.
    pub value_json: Option<String>,
}

/// Response for a node addition.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddNodeResponse {
    /// The identity of the newly created node.
    pub node_id: String,
}

/// Response for a node removal.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveNodeResponse {
    /// `false` when the node id was unknown.
    pub removed: bool,
}

/// Request to switch the read strategy.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrategyRequest {
    /// One of `strong`, `eventual`, `weak`.
    pub strategy: String,
}

/// Generic acknowledgment (strategy switch, rebalance).
#[derive(Debug, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}

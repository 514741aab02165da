//! Distributed Key/Value Cache Library
//!
//! This library crate defines the core modules of a simulated distributed
//! cache: nodes are in-process stores, not separate processes, and all
//! coordination happens through explicit calls on the coordinator.
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`node`**: The per-node local store. Each node owns a thread-safe map of
//!   key/value pairs plus an activity flag and a last-touched timestamp.
//! - **`partition`**: The placement logic. Maps a key over the active-node
//!   list to a primary node and, when the cluster has more than one node, a
//!   replica.
//! - **`consistency`**: The read-reconciliation logic. Implements the strong,
//!   eventual, and weak strategies as a pure resolver over per-holder values.
//! - **`coordinator`**: The orchestration layer. Owns the node registry and
//!   the key distribution table, routes puts and gets, migrates keys on node
//!   removal, and rebalances the cluster on demand.

pub mod consistency;
pub mod coordinator;
pub mod node;
pub mod partition;

//! Cache Coordinator Module
//!
//! Orchestrates the cluster: owns the node registry and the key distribution
//! table, routes writes through the partitioner, and reconciles reads through
//! the consistency resolver.
//!
//! ## Core Concepts
//! - **Registry**: The set of nodes, mutated only by explicit add/remove calls.
//! - **Distribution Table**: `key -> holder set`, written on put, rebuilt from
//!   scratch by rebalance, best-effort in between.
//! - **Churn Gate**: Rebalance and node removal rewrite node stores and the
//!   table wholesale; a coordinator-wide lock keeps them from interleaving
//!   with in-flight puts and gets.
//! - **Access**: The HTTP handlers in `handlers.rs` expose the coordinator to
//!   operators; `protocol.rs` carries the DTOs.

pub mod handlers;
pub mod protocol;
pub mod service;

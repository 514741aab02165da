//! Cache Node Module
//!
//! Implements the per-node local key/value store.
//!
//! ## Core Concepts
//! - **Local Store**: Each node owns a concurrent map of its key/value pairs.
//! - **Activity Flag**: An inactive node is skipped by placement and read aggregation,
//!   but its local data is kept (it may be marked active again later).
//! - **Last Touched**: A timestamp refreshed on every read or write, kept purely
//!   for the statistics report.

pub mod store;

#[cfg(test)]
mod tests;

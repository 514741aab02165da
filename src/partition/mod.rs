//! Partition Module
//!
//! Decides which nodes hold a given key.
//!
//! ## Core Concepts
//! - **Placement**: Direct modulo placement of the key hash over the sorted
//!   active-node list: a primary, plus one replica when the cluster has more
//!   than one node.
//! - **Determinism**: For a fixed active-node list and key, the holder set is
//!   always the same.
//!
//! This is deliberately *not* a consistent-hashing ring: changing the
//! active-node count remaps most keys to different primaries.

pub mod selector;

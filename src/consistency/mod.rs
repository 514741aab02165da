//! Consistency Module
//!
//! Decides which value a read returns when a key has several holders.
//!
//! ## Strategies
//! - **Strong**: reads every active holder, reports divergence when copies
//!   disagree, and answers with the first holder's value. Detection only —
//!   there is no quorum repair.
//! - **Eventual**: first present value in holder order; a miss on one holder
//!   does not block trying the next.
//! - **Weak**: whatever the first holder has, present or not, without
//!   consulting the rest.
//!
//! Resolution is a pure function over the gathered per-holder values so it
//! can be tested without any node I/O.

pub mod resolver;

#[cfg(test)]
mod tests;

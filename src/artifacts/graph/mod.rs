//! Graph construction and serialization
//!
//! - `dot`: node/edge statement formatting and the graph envelope
//! - `builder`: recursive commit -> tree -> subtree walk
//! - `chain`: linear commit-history chain

pub mod builder;
pub mod chain;
pub mod dot;

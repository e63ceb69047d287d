//! Render a git repository's object store as DOT graph text.
//!
//! Two independent pipelines share the DOT output helpers:
//!
//! - the tree graph: resolve HEAD, then walk commit -> tree -> subtree
//!   through the loose object store, one node per visited object and one
//!   labeled edge per tree entry;
//! - the history chain: list the commit history and connect each commit
//!   to the next.

pub mod areas;
pub mod artifacts;
pub mod commands;

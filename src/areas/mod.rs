//! Core repository components
//!
//! This module contains the read-only building blocks the graph
//! pipelines are assembled from:
//!
//! - `database`: loose object store reader (locate, decompress, decode)
//! - `refs`: HEAD resolution (symbolic or direct, with branch fallback)
//! - `history`: external commit-history listing collaborator
//! - `repository`: high-level coordination and output writer

pub mod database;
pub mod history;
pub mod refs;
pub mod repository;

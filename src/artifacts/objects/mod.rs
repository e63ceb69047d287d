//! Object types consumed from the store
//!
//! - `object_id`: validated 40-character hexadecimal identifier
//! - `commit`: commit header decoder (tree id extraction)
//! - `tree`: tree listing decoder (`<mode> <hash> <name>` lines)

pub mod commit;
pub mod object_id;
pub mod tree;

/// Length of a full hexadecimal object id
pub const OBJECT_ID_LENGTH: usize = 40;

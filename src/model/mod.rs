//! Core value types for merkle_levels

mod block;
mod digest;

pub use block::DataBlock;
pub use digest::{Digest, DIGEST_LEN};

//! Binary Merkle tree over ordered data blocks
//!
//! Construction hashes every block into the leaf level, then repeatedly
//! pairs neighbouring digests until a single root remains:
//! - a full pair `(a, b)` becomes `SHA-256(a ‖ b)`
//! - an unpaired tail `a` becomes `SHA-256(a)`

mod build;
mod merkle;

pub use build::{expected_height, rounds_for};
pub use merkle::MerkleTree;

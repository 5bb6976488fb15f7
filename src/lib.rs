//! # merkle_levels
//!
//! A binary Merkle tree over an ordered list of data blocks, built once and
//! inspected level by level.
//!
//! ## Construction
//!
//! - **Leaves**: level 0 holds `SHA-256(block)` for each block, in order
//! - **Pairs**: each level above hashes `left ‖ right` for consecutive pairs
//! - **Odd tail**: an unpaired last digest is hashed again on its own
//! - **Root**: the single digest on the last level
//!
//! ## Example
//!
//! ```
//! use merkle_levels::MerkleTree;
//!
//! let tree = MerkleTree::create(["e-markets", "Garden", "Dobra Open-source Lane"])?;
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.level(1)?.len(), 2);
//! assert_eq!(
//!     tree.root().to_hex(),
//!     "67cefb11f7e49f4e44e5f6540df70185f3b5ebbc3696eafc2723c1da8fa17efc"
//! );
//! # Ok::<(), merkle_levels::Error>(())
//! ```

pub mod config;
pub mod input;
pub mod model;
pub mod tree;

mod error;
mod export;

pub use config::Config;
pub use error::{Error, Result};
pub use export::TreeExport;
pub use model::{DataBlock, Digest, DIGEST_LEN};
pub use tree::{expected_height, MerkleTree};

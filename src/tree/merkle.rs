//! The Merkle tree type and its query surface

use super::build::{build_levels, hash_leaves};
use crate::export::TreeExport;
use crate::model::{DataBlock, Digest};
use crate::{Error, Result};
use log::debug;

/// A binary Merkle tree over an ordered list of data blocks
///
/// Built once with [`MerkleTree::create`] and read-only afterwards. Levels are
/// stored leaf-first:
/// - level 0 holds `SHA-256(block)` for each block, in input order
/// - each level above holds `SHA-256(a ‖ b)` for consecutive pairs, with an
///   unpaired tail re-hashed on its own as `SHA-256(a)`
/// - the last level holds the root alone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
    blocks: Vec<DataBlock>,
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree from an ordered list of blocks
    ///
    /// Fails with [`Error::EmptyInput`] when no blocks are given.
    pub fn create<I>(blocks: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<DataBlock>,
    {
        let blocks: Vec<DataBlock> = blocks.into_iter().map(Into::into).collect();
        if blocks.is_empty() {
            return Err(Error::EmptyInput);
        }

        let levels = build_levels(hash_leaves(&blocks));
        debug!(
            "built merkle tree: {} blocks, height {}",
            blocks.len(),
            levels.len()
        );

        Ok(MerkleTree { blocks, levels })
    }

    /// Number of levels, leaves included (always at least 1)
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Copy of the digests at `index`, left to right
    pub fn level(&self, index: usize) -> Result<Vec<Digest>> {
        self.levels
            .get(index)
            .cloned()
            .ok_or_else(|| Error::LevelNotFound(i64::try_from(index).unwrap_or(i64::MAX)))
    }

    /// The root digest
    pub fn root(&self) -> Digest {
        // A built tree always ends in a singleton level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves, equal to the number of input blocks
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// The leaf level
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// Iterate over all levels, leaves first
    pub fn levels(&self) -> impl Iterator<Item = &[Digest]> + '_ {
        self.levels.iter().map(Vec::as_slice)
    }

    /// The blocks this tree was built from, in input order
    pub fn data_blocks(&self) -> &[DataBlock] {
        &self.blocks
    }

    /// Serializable snapshot of the tree's digests
    pub fn export(&self) -> TreeExport {
        TreeExport::from_tree(self)
    }
}

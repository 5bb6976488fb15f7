//! Serializable snapshot of a built tree

use crate::model::Digest;
use crate::tree::MerkleTree;
use serde::{Deserialize, Serialize};

/// A tree's digests in export form
///
/// Digests serialize as lowercase hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeExport {
    /// Number of levels, leaves included
    pub height: usize,
    /// Number of input blocks
    pub leaf_count: usize,
    /// The root digest
    pub root: Digest,
    /// Every level, leaves first
    pub levels: Vec<Vec<Digest>>,
}

impl TreeExport {
    pub(crate) fn from_tree(tree: &MerkleTree) -> Self {
        TreeExport {
            height: tree.height(),
            leaf_count: tree.leaf_count(),
            root: tree.root(),
            levels: tree.levels().map(<[Digest]>::to_vec).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_shape() {
        let tree = MerkleTree::create(["e-markets", "Garden", "Dobra Open-source Lane"]).unwrap();
        let export = tree.export();

        assert_eq!(export.height, 3);
        assert_eq!(export.leaf_count, 3);
        assert_eq!(export.root, tree.root());
        assert_eq!(export.levels.len(), 3);
        assert_eq!(export.levels[1], tree.level(1).unwrap());
    }

    #[test]
    fn test_export_json() {
        let tree = MerkleTree::create(["e-markets", "Garden", "Dobra Open-source Lane"]).unwrap();
        let json = serde_json::to_value(tree.export()).unwrap();

        assert_eq!(
            json["root"],
            "67cefb11f7e49f4e44e5f6540df70185f3b5ebbc3696eafc2723c1da8fa17efc"
        );
        assert_eq!(
            json["levels"][1][1],
            "4d69cacdd7c9f23e2947379ab466222b23a7a0fa11e2b4bd54e39d63a452e70b"
        );

        let back: TreeExport = serde_json::from_value(json).unwrap();
        assert_eq!(back, tree.export());
    }
}

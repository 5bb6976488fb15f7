//! Input data blocks

use std::fmt;

/// One ordered input to a Merkle tree
///
/// A block is an owned byte buffer. Strings are taken as their UTF-8 bytes.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DataBlock(Vec<u8>);

impl DataBlock {
    /// Create a block from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        DataBlock(bytes.into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the block, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the block holds no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for DataBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "DataBlock({:?})", s),
            Err(_) => write!(f, "DataBlock(0x{})", hex::encode(&self.0)),
        }
    }
}

impl AsRef<[u8]> for DataBlock {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for DataBlock {
    fn from(bytes: Vec<u8>) -> Self {
        DataBlock(bytes)
    }
}

impl From<&[u8]> for DataBlock {
    fn from(bytes: &[u8]) -> Self {
        DataBlock(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for DataBlock {
    fn from(bytes: &[u8; N]) -> Self {
        DataBlock(bytes.to_vec())
    }
}

impl From<String> for DataBlock {
    fn from(s: String) -> Self {
        DataBlock(s.into_bytes())
    }
}

impl From<&str> for DataBlock {
    fn from(s: &str) -> Self {
        DataBlock(s.as_bytes().to_vec())
    }
}

impl From<&String> for DataBlock {
    fn from(s: &String) -> Self {
        DataBlock::from(s.as_str())
    }
}

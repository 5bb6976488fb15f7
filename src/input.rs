//! Reading data blocks from line-oriented sources

use crate::model::DataBlock;
use crate::Result;
use std::io::BufRead;
use std::path::Path;

/// Read one block per line
///
/// Lines are raw bytes; they need not be UTF-8. Line terminators (`\n` or
/// `\r\n`) are stripped. Blank lines inside the input are kept as empty
/// blocks; a trailing newline does not add one.
pub fn read_blocks<R: BufRead>(reader: R) -> Result<Vec<DataBlock>> {
    let mut blocks = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        blocks.push(DataBlock::from(line));
    }
    Ok(blocks)
}

/// Read one block per line from a file
pub fn read_blocks_from_file(path: &Path) -> Result<Vec<DataBlock>> {
    let file = std::fs::File::open(path)?;
    read_blocks(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_blocks_strips_terminators() {
        let blocks = read_blocks(Cursor::new("alpha\r\nbeta\n\ngamma\n")).unwrap();
        assert_eq!(
            blocks,
            vec![
                DataBlock::from("alpha"),
                DataBlock::from("beta"),
                DataBlock::from(""),
                DataBlock::from("gamma"),
            ]
        );
    }

    #[test]
    fn test_read_blocks_keeps_non_utf8_bytes() {
        let blocks = read_blocks(Cursor::new(vec![0xff, 0xfe, b'\n', b'a', b'\n'])).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_bytes(), &[0xff, 0xfe]);
        assert_eq!(blocks[1].as_bytes(), b"a");
    }

    #[test]
    fn test_read_blocks_empty_source() {
        assert!(read_blocks(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_blocks_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_blocks_from_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}

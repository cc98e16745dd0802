//! Compiled rule-table files.
//!
//! Layout: 4 magic bytes, a version byte, 3 reserved bytes, then the
//! bincode-encoded rule list. Tables are small enough to read whole;
//! loading re-runs the builder, so a tampered file fails validation the
//! same way a bad source file does.

use std::fs;
use std::path::Path;

use super::{RuleTable, TableError};

pub(super) const MAGIC: &[u8; 4] = b"LPRT";
pub(super) const VERSION: u8 = 1;
const HEADER_SIZE: usize = 8;

impl RuleTable {
    pub fn to_bytes(&self) -> Result<Vec<u8>, TableError> {
        let payload = bincode::serialize(&self.rules).map_err(TableError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&payload);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, TableError> {
        if data.len() < 5 {
            return Err(TableError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(TableError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(TableError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(TableError::InvalidHeader);
        }
        let rules: Vec<(String, String)> =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(TableError::Deserialize)?;
        RuleTable::from_pairs(rules)
    }

    pub fn open(path: &Path) -> Result<Self, TableError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleTable {
        RuleTable::from_pairs([("ka", "ka"), ("sh", "sh"), ("्", "")]).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let table = sample();
        let bytes = table.to_bytes().unwrap();
        let loaded = RuleTable::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.len(), table.len());
        assert_eq!(loaded.lookup("ka"), Some("ka"));
        assert_eq!(loaded.lookup("्"), Some(""));
        assert_eq!(loaded.max_pattern_len(), table.max_pattern_len());
        assert_eq!(loaded.max_fragment_len(), table.max_fragment_len());
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[0] = b'X';
        let err = RuleTable::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TableError::InvalidMagic));
    }

    #[test]
    fn test_unsupported_version() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[4] = 99;
        let err = RuleTable::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TableError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_truncated() {
        let err = RuleTable::from_bytes(b"LPR").unwrap_err();
        assert!(matches!(err, TableError::InvalidHeader));
    }

    #[test]
    fn test_corrupt_payload() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes.truncate(HEADER_SIZE + 2);
        let err = RuleTable::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, TableError::Deserialize(_)));
    }

    #[test]
    fn test_save_and_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.lpt");
        let table = sample();
        table.save(&path).unwrap();
        let loaded = RuleTable::open(&path).unwrap();
        assert_eq!(loaded.lookup("sh"), Some("sh"));
    }
}

//! Longest-match rule tables driving all segmentation and substitution.
//!
//! A table maps source-script patterns (1..K chars) to target fragments.
//! It is built once (from rule pairs, TOML text, or a compiled table
//! file) and then shared read-only across calls; hot reload means swapping
//! the whole table reference, never mutating one in place.

mod config;
mod devanagari;
mod io;
mod trie;

use std::path::Path;
use std::sync::OnceLock;

pub use config::{parse_rules_toml, RuleConfigError};

use trie::PatternTrie;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("duplicate source pattern: {0}")]
    DuplicateKey(String),

    #[error("empty source pattern")]
    EmptyPattern,

    #[error("rule set is empty")]
    Empty,

    #[error("config error: {0}")]
    Config(#[from] RuleConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected LPRT)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Immutable source-pattern → target-fragment mapping.
///
/// Longer patterns always win over shorter ones sharing a prefix. The unit
/// of matching is the `char`; a multi-char pattern declared here is never
/// split by the segmenter.
#[derive(Debug)]
pub struct RuleTable {
    trie: PatternTrie,
    rules: Vec<(String, String)>,
    max_pattern_len: usize,
    max_fragment_len: usize,
}

impl RuleTable {
    /// Build a table from `(pattern, fragment)` pairs.
    ///
    /// Fails on the first duplicate or empty pattern; nothing partially
    /// built escapes. Empty fragments are legal (silent elements).
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut trie = PatternTrie::new();
        let mut rules = Vec::new();
        let mut max_pattern_len = 0;
        let mut max_fragment_len = 0;

        for (pattern, fragment) in pairs {
            let (pattern, fragment) = (pattern.into(), fragment.into());
            if pattern.is_empty() {
                return Err(TableError::EmptyPattern);
            }
            if !trie.insert(&pattern, &fragment) {
                return Err(TableError::DuplicateKey(pattern));
            }
            max_pattern_len = max_pattern_len.max(pattern.chars().count());
            max_fragment_len = max_fragment_len.max(fragment.len());
            rules.push((pattern, fragment));
        }

        if rules.is_empty() {
            return Err(TableError::Empty);
        }

        Ok(Self {
            trie,
            rules,
            max_pattern_len,
            max_fragment_len,
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let rules = parse_rules_toml(toml_str)?;
        Self::from_pairs(rules)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The built-in Devanagari → Latin table.
    pub fn builtin() -> &'static RuleTable {
        static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RuleTable::from_toml(devanagari::DEFAULT_TOML)
                .expect("built-in rule table must be valid")
        })
    }

    /// Exact lookup of one pattern.
    pub fn lookup(&self, pattern: &str) -> Option<&str> {
        self.trie.get(pattern)
    }

    /// Longest pattern matching at `offset`, bounded by the remaining input.
    ///
    /// Returns `(consumed_units, fragment)`. Equivalent to probing window
    /// lengths K, K-1, .., 1 and taking the first hit, realized as a single
    /// forward trie walk.
    pub fn lookup_longest(&self, units: &[char], offset: usize) -> Option<(usize, &str)> {
        self.trie.walk_longest(units, offset, self.max_pattern_len)
    }

    /// K: longest pattern length in chars, for bounding lookup windows.
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }

    /// K_out: longest fragment length in bytes, for worst-case buffer sizing.
    pub fn max_fragment_len(&self) -> usize {
        self.max_fragment_len
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in insertion order, as supplied at build time.
    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}

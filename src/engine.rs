//! Transliteration driver: segmentation, assembly, post-processing.
//!
//! Stateless per call. One engine handle (or a bare table reference) may
//! serve concurrent calls because the table is immutable once built.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::buffer::OutputBuffer;
use crate::segment::{Fragment, Segmenter};
use crate::table::RuleTable;
use crate::unicode::{classify, Script};

/// Transliterate `input` against `table`, trimming surrounding whitespace.
///
/// Empty input yields empty output. Unmapped units pass through unchanged;
/// there is no call-time failure mode for a constructed table.
pub fn transliterate(input: &str, table: &RuleTable) -> String {
    if input.is_empty() {
        return String::new();
    }

    let units: Vec<char> = input.chars().collect();
    let _span = debug_span!("transliterate", units = units.len()).entered();

    let mut buf = OutputBuffer::with_estimate(units.len(), table.max_fragment_len());
    let mut mapped = 0usize;
    for cluster in Segmenter::new(&units, table) {
        match cluster.fragment {
            Fragment::Mapped(fragment) => {
                mapped += 1;
                buf.push_fragment(fragment);
            }
            Fragment::Passthrough(unit) => buf.push_unit(unit),
        }
    }
    debug!(mapped, "assembled output");

    buf.finish().trim().to_string()
}

/// Long-lived handle sharing one immutable table across threads.
///
/// Hot reload is a whole-table swap: build a new `RuleTable`, wrap it in
/// a new handle, drop the old one. In-flight calls keep the table they
/// started with.
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: Arc<RuleTable>,
}

impl Transliterator {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn transliterate(&self, input: &str) -> String {
        transliterate(input, &self.table)
    }

    pub fn explain(&self, input: &str) -> Vec<ClusterTrace> {
        explain(input, &self.table)
    }
}

/// Per-cluster record of one conversion, for diagnostics and tooling.
#[derive(Debug, Serialize)]
pub struct ClusterTrace {
    pub start: usize,
    pub len: usize,
    pub source: String,
    pub output: String,
    pub passthrough: bool,
    pub script: Script,
}

/// Trace every cluster decision for `input`. Untrimmed: surrounding
/// whitespace clusters appear here even though `transliterate` drops them.
pub fn explain(input: &str, table: &RuleTable) -> Vec<ClusterTrace> {
    let units: Vec<char> = input.chars().collect();
    Segmenter::new(&units, table)
        .map(|cluster| {
            let source: String = units[cluster.start..cluster.end()].iter().collect();
            let (output, passthrough) = match cluster.fragment {
                Fragment::Mapped(fragment) => (fragment.to_string(), false),
                Fragment::Passthrough(unit) => (unit.to_string(), true),
            };
            ClusterTrace {
                start: cluster.start,
                len: cluster.len,
                source,
                output,
                passthrough,
                script: classify(units[cluster.start]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_table() -> RuleTable {
        RuleTable::from_pairs([("sh", "sh"), ("s", "s"), ("h", "h")]).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transliterate("", &sh_table()), "");
        assert_eq!(transliterate("", RuleTable::builtin()), "");
    }

    #[test]
    fn test_longest_match_not_first_match() {
        // "sh" resolves via the single 2-unit rule, not "s"+"h"
        let table = RuleTable::from_pairs([("a", "X"), ("ab", "Y"), ("b", "B")]).unwrap();
        assert_eq!(transliterate("ab", &table), "Y");
        assert_eq!(transliterate("sh", &sh_table()), "sh");
    }

    #[test]
    fn test_kaka_scenario() {
        let table = RuleTable::from_pairs([("ka", "ka"), ("a", "a"), ("k", "k")]).unwrap();
        assert_eq!(transliterate("kaka", &table), "kaka");
    }

    #[test]
    fn test_identity_passthrough() {
        // every unit unmapped: output equals input trimmed
        let table = RuleTable::from_pairs([("zz", "zz")]).unwrap();
        assert_eq!(transliterate("hello world", &table), "hello world");
        assert_eq!(transliterate("  hello world  ", &table), "hello world");
    }

    #[test]
    fn test_trim_matches_untrimmed_input() {
        let table = sh_table();
        assert_eq!(transliterate(" sh ", &table), transliterate("sh", &table));
    }

    #[test]
    fn test_silent_fragment() {
        let table = RuleTable::from_pairs([("x", ""), ("a", "a")]).unwrap();
        assert_eq!(transliterate("xax", &table), "a");
    }

    #[test]
    fn test_devanagari_words() {
        let table = RuleTable::builtin();
        assert_eq!(transliterate("नमस्ते", table), "namaste");
        assert_eq!(transliterate("हिन्दी", table), "hindii");
        assert_eq!(transliterate("क्ष", table), "ksha");
        assert_eq!(transliterate("ज्ञान", table), "gyaana");
    }

    #[test]
    fn test_devanagari_digits_and_mixed_text() {
        let table = RuleTable::builtin();
        assert_eq!(transliterate("२०२४", table), "2024");
        assert_eq!(transliterate("नमस्ते world", table), "namaste world");
    }

    #[test]
    fn test_concurrent_calls_share_one_table() {
        let table = Arc::new(RuleTable::from_pairs([("ka", "ka"), ("k", "k"), ("a", "a")]).unwrap());
        let engine = Transliterator::new(table);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.transliterate("kaka"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "kaka");
        }
    }

    #[test]
    fn test_explain_traces() {
        let traces = explain("क्ष!", RuleTable::builtin());
        assert_eq!(traces.len(), 3);

        assert_eq!(traces[0].source, "क्");
        assert_eq!(traces[0].output, "k");
        assert!(!traces[0].passthrough);
        assert_eq!(traces[0].script, Script::Devanagari);

        assert_eq!(traces[1].source, "ष");
        assert_eq!(traces[1].output, "sha");

        assert_eq!(traces[2].source, "!");
        assert!(traces[2].passthrough);
        assert_eq!(traces[2].script, Script::Common);
    }
}

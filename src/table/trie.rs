use std::collections::HashMap;

#[derive(Debug)]
struct Node {
    children: HashMap<char, Node>,
    fragment: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            fragment: None,
        }
    }
}

/// Char-keyed prefix trie over source patterns.
///
/// Multi-char patterns (conjuncts, consonant+matra clusters) live on the
/// same paths as their single-char prefixes; `walk_longest` resolves the
/// longest-match rule in one forward pass.
#[derive(Debug)]
pub(super) struct PatternTrie {
    root: Node,
}

impl PatternTrie {
    pub(super) fn new() -> Self {
        Self { root: Node::new() }
    }

    /// Insert a pattern. Returns `false` if the pattern was already present;
    /// the existing fragment is left untouched in that case.
    pub(super) fn insert(&mut self, pattern: &str, fragment: &str) -> bool {
        let mut node = &mut self.root;
        for unit in pattern.chars() {
            node = node.children.entry(unit).or_insert_with(Node::new);
        }
        if node.fragment.is_some() {
            return false;
        }
        node.fragment = Some(fragment.to_string());
        true
    }

    pub(super) fn get(&self, pattern: &str) -> Option<&str> {
        let mut node = &self.root;
        for unit in pattern.chars() {
            node = node.children.get(&unit)?;
        }
        node.fragment.as_deref()
    }

    /// Longest pattern matching `units` at `offset`, at most `max_len` units.
    ///
    /// Walks forward remembering the deepest terminal node passed, which is
    /// exactly the longest-match-first result: a hit at length n shadows any
    /// hit at a shorter length. Never reads past the end of `units`.
    pub(super) fn walk_longest<'t>(
        &'t self,
        units: &[char],
        offset: usize,
        max_len: usize,
    ) -> Option<(usize, &'t str)> {
        let end = units.len().min(offset.saturating_add(max_len));
        let mut node = &self.root;
        let mut best = None;
        for (i, unit) in units[offset..end].iter().enumerate() {
            match node.children.get(unit) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(fragment) = &node.fragment {
                best = Some((i + 1, fragment.as_str()));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PatternTrie {
        let mut trie = PatternTrie::new();
        assert!(trie.insert("s", "s"));
        assert!(trie.insert("sh", "sh"));
        assert!(trie.insert("h", "h"));
        trie
    }

    #[test]
    fn test_insert_and_get() {
        let trie = sample();
        assert_eq!(trie.get("sh"), Some("sh"));
        assert_eq!(trie.get("s"), Some("s"));
        assert_eq!(trie.get("x"), None);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut trie = sample();
        assert!(!trie.insert("sh", "other"));
        // first fragment wins
        assert_eq!(trie.get("sh"), Some("sh"));
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let mut trie = PatternTrie::new();
        trie.insert("abc", "x");
        assert_eq!(trie.get("ab"), None);
    }

    #[test]
    fn test_walk_longest_prefers_longer() {
        let trie = sample();
        let units: Vec<char> = "sha".chars().collect();
        assert_eq!(trie.walk_longest(&units, 0, 2), Some((2, "sh")));
    }

    #[test]
    fn test_walk_longest_bounded_by_max_len() {
        let trie = sample();
        let units: Vec<char> = "sh".chars().collect();
        assert_eq!(trie.walk_longest(&units, 0, 1), Some((1, "s")));
    }

    #[test]
    fn test_walk_longest_bounded_by_input_end() {
        let trie = sample();
        let units: Vec<char> = "s".chars().collect();
        // max_len exceeds remaining input; only the 1-unit pattern is tried
        assert_eq!(trie.walk_longest(&units, 0, 8), Some((1, "s")));
    }

    #[test]
    fn test_walk_longest_none() {
        let trie = sample();
        let units: Vec<char> = "xy".chars().collect();
        assert_eq!(trie.walk_longest(&units, 0, 2), None);
    }

    #[test]
    fn test_walk_longest_at_offset() {
        let trie = sample();
        let units: Vec<char> = "xsh".chars().collect();
        assert_eq!(trie.walk_longest(&units, 1, 2), Some((2, "sh")));
    }
}

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RulesConfig {
    rules: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[rules] table is empty")]
    Empty,
    #[error("empty source pattern")]
    EmptyPattern,
}

/// Parse TOML text into a sorted `BTreeMap<pattern, fragment>`.
///
/// Empty fragments are legal (a dropped/silent element, e.g. the virama);
/// empty patterns are not. Duplicate patterns cannot survive this layer:
/// the TOML parser itself rejects a key defined twice.
pub fn parse_rules_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RuleConfigError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;

    if config.rules.is_empty() {
        return Err(RuleConfigError::Empty);
    }

    for key in config.rules.keys() {
        if key.is_empty() {
            return Err(RuleConfigError::EmptyPattern);
        }
    }

    Ok(config.rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[rules]
"क" = "ka"
"का" = "kaa"
"#;
        let map = parse_rules_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["क"], "ka");
        assert_eq!(map["का"], "kaa");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_rules_toml(super::super::devanagari::DEFAULT_TOML).unwrap();
        assert!(map.len() > 500, "expected 500+ rules, got {}", map.len());
    }

    #[test]
    fn empty_fragment_is_legal() {
        let toml = r#"
[rules]
"्" = ""
"#;
        let map = parse_rules_toml(toml).unwrap();
        assert_eq!(map["्"], "");
    }

    #[test]
    fn error_empty_rules() {
        let toml = "[rules]\n";
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RuleConfigError::Empty));
    }

    #[test]
    fn error_empty_pattern() {
        let toml = r#"
[rules]
"" = "x"
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RuleConfigError::EmptyPattern));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_rules_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RuleConfigError::Parse(_)));
    }

    #[test]
    fn error_duplicate_key_rejected_by_parser() {
        let toml = r#"
[rules]
"ka" = "x"
"ka" = "y"
"#;
        let err = parse_rules_toml(toml).unwrap_err();
        assert!(matches!(err, RuleConfigError::Parse(_)));
    }
}

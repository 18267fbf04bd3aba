use serde::Deserialize;
use std::collections::HashSet;

use crate::filter::denylist;

/// Extraction policy knobs. Everything has a sane default, so
/// `ExtractConfig::default()` is the common case.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Wordlist tokens shorter than this are dropped.
    pub min_word_length: usize,
    /// Canonical symbol substituted for dynamic URL segments.
    pub placeholder_token: String,
    /// Generic English stop-words excluded from the wordlist (checked
    /// case-insensitively).
    pub stop_words: HashSet<String>,
    /// Source-language reserved words excluded from the wordlist (checked
    /// case-insensitively).
    pub keyword_denylist: HashSet<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            placeholder_token: "EXPR".to_string(),
            stop_words: denylist::default_stop_words(),
            keyword_denylist: denylist::default_keywords(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_values() {
        let cfg = ExtractConfig::default();
        assert_eq!(cfg.min_word_length, 3);
        assert_eq!(cfg.placeholder_token, "EXPR");
        assert!(cfg.stop_words.contains("the"));
        assert!(cfg.keyword_denylist.contains("function"));
    }

    #[test]
    fn partial_json_overrides() {
        let cfg: ExtractConfig =
            serde_json::from_str(r#"{"minWordLength": 4}"#).unwrap_or_default();
        // field names are snake_case on the wire; the camelCase key is ignored
        let cfg2: ExtractConfig = serde_json::from_str(r#"{"min_word_length": 4}"#).unwrap();
        assert_eq!(cfg.min_word_length, 3);
        assert_eq!(cfg2.min_word_length, 4);
        assert_eq!(cfg2.placeholder_token, "EXPR");
    }
}

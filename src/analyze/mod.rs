//! The extraction pipeline: one shared scan, three independent analyzers,
//! one merged result per source unit. Everything here is a pure function
//! over in-memory text; there is no I/O, no global state and no failure
//! mode — the worst case for any field is an empty set.

pub mod params;
pub mod url_patterns;
pub mod wordlist;

use serde::Serialize;

use crate::config::ExtractConfig;
use crate::scan;

pub use params::{ParamContext, ParameterName};
pub use wordlist::{WordSource, WordlistEntry};

/// Raw text plus an identifying label (typically the originating file path).
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub label: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Per-unit extraction output. Each collection has set semantics (unique,
/// sorted for deterministic snapshots); the caller owns anything beyond
/// that, including persistence and cross-unit merging.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    pub url_patterns: Vec<String>,
    pub parameters: Vec<ParameterName>,
    pub wordlist: Vec<WordlistEntry>,
}

/// Run all analyzers over one source unit. Total: never fails, any input
/// string (including empty) yields a result.
pub fn extract(unit: &SourceUnit, cfg: &ExtractConfig) -> ExtractionResult {
    let tokens = scan::scan(&unit.text);
    let tags = scan::find_tags(&unit.text);

    let result = ExtractionResult {
        url_patterns: url_patterns::extract_url_patterns(
            &unit.text,
            &tokens,
            &cfg.placeholder_token,
        ),
        parameters: params::extract_parameters(&unit.text, &tokens, &tags),
        wordlist: wordlist::extract_wordlist(&tokens, &tags, cfg),
    };

    tracing::debug!(
        label = %unit.label,
        url_patterns = result.url_patterns.len(),
        parameters = result.parameters.len(),
        wordlist = result.wordlist.len(),
        "extraction complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_result() {
        let result = extract(&SourceUnit::new("empty.js", ""), &ExtractConfig::default());
        assert!(result.url_patterns.is_empty());
        assert!(result.parameters.is_empty());
        assert!(result.wordlist.is_empty());
    }

    #[test]
    fn custom_placeholder_token() {
        let cfg = ExtractConfig {
            placeholder_token: "{param}".to_string(),
            ..ExtractConfig::default()
        };
        let unit = SourceUnit::new("a.js", r#"fetch("/api/" + v + "/users");"#);
        assert_eq!(extract(&unit, &cfg).url_patterns, vec!["/api/{param}/users"]);
    }
}

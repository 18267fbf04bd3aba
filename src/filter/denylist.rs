//! Built-in wordlist denylists. These are data, not logic: `ExtractConfig`
//! copies them as its defaults and callers may substitute their own sets.

use ahash::AHashSet;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Generic English stop-words. Kept deliberately short: the goal is to keep
/// glue words out of fuzzing wordlists, not to implement NLP.
pub static STOP_WORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "with", "from", "into", "about", "other", "these", "those",
        "this", "that", "are", "was", "were", "has", "have", "had", "been", "being",
        "not", "but", "you", "your", "our", "their", "they", "them", "its", "any",
        "all", "can", "could", "will", "would", "should", "may", "might", "must",
        "more", "most", "some", "such", "than", "then", "when", "where", "which",
        "while", "who", "what", "how", "why", "also", "only", "very", "just", "each",
        "per", "via", "out", "over", "under", "here", "there",
    ]
    .into_iter()
    .collect()
});

/// JavaScript-family reserved words and common language noise. Identifier
/// fallback tokens would flood the wordlist with these otherwise.
pub static KEYWORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "var", "let", "const", "function", "return", "new", "true", "false", "null",
        "undefined", "typeof", "instanceof", "class", "extends", "super", "import",
        "export", "default", "if", "else", "switch", "case", "break", "continue",
        "while", "do", "in", "of", "try", "catch", "finally", "throw", "async",
        "await", "yield", "delete", "void", "this", "static", "get", "set",
    ]
    .into_iter()
    .collect()
});

pub fn default_stop_words() -> HashSet<String> {
    STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

pub fn default_keywords() -> HashSet<String> {
    KEYWORDS.iter().map(|w| w.to_string()).collect()
}

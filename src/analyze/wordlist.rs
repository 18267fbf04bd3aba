//! Quality-wordlist harvesting. Comments, alt text, titles and meta
//! descriptions carry the most human-language signal in source text;
//! identifier sub-words are kept as a lower-confidence fallback. Everything
//! is lowercased and filtered against the configured denylists so the
//! output is usable directly as a fuzzing dictionary.

use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::ExtractConfig;
use crate::scan::{HtmlTag, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WordSource {
    Comment,
    AltText,
    AriaLabel,
    Title,
    MetaContent,
    Identifier,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordlistEntry {
    pub word: String,
    pub count: u64,
    pub sources: SmallVec<[WordSource; 6]>,
}

/// Harvest, normalize and filter wordlist candidates from one source unit.
pub fn extract_wordlist(tokens: &[Token], tags: &[HtmlTag], cfg: &ExtractConfig) -> Vec<WordlistEntry> {
    // denylist membership is case-insensitive; fold both sets once up front
    let denylist: AHashSet<String> = cfg
        .stop_words
        .iter()
        .chain(cfg.keyword_denylist.iter())
        .map(|w| w.to_lowercase())
        .collect();

    let mut found: AHashMap<String, (u64, SmallVec<[WordSource; 6]>)> = AHashMap::new();
    let mut add = |word: String, source: WordSource| {
        if word.len() < cfg.min_word_length || denylist.contains(&word) {
            return;
        }
        let entry = found.entry(word).or_default();
        entry.0 += 1;
        if !entry.1.contains(&source) {
            entry.1.push(source);
        }
    };

    for tok in tokens {
        match tok.kind {
            TokenKind::Comment => {
                for word in harvest(&tok.text) {
                    add(word, WordSource::Comment);
                }
            }
            TokenKind::Ident => {
                for word in split_subwords(&tok.text) {
                    add(word, WordSource::Identifier);
                }
            }
            _ => {}
        }
    }

    for tag in tags {
        for (key, value) in &tag.attrs {
            let source = match key.to_lowercase().as_str() {
                "alt" => WordSource::AltText,
                "aria-label" => WordSource::AriaLabel,
                "title" => WordSource::Title,
                "content" if tag.name == "meta" => WordSource::MetaContent,
                _ => continue,
            };
            for word in harvest(value) {
                add(word, source);
            }
        }
    }

    let mut out: Vec<WordlistEntry> = found
        .into_iter()
        .map(|(word, (count, sources))| WordlistEntry { word, count, sources })
        .collect();
    out.sort_by(|a, b| a.word.cmp(&b.word));
    out
}

/// Split free text into lowercased candidate words with non-alphabetic
/// leading/trailing characters stripped. Interior punctuation survives
/// (`don't`, `e-mail`).
fn harvest(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|chunk| {
            chunk
                .trim_matches(|c: char| !c.is_ascii_alphabetic())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Break an identifier on camelCase, snake_case, kebab-case and digit
/// boundaries into lowercased sub-words.
fn split_subwords(ident: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in ident.chars() {
        if c == '_' || c == '-' || c.is_ascii_digit() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            current.push(c.to_ascii_lowercase());
            prev_lower = true;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;

    fn words(src: &str) -> Vec<WordlistEntry> {
        let cfg = ExtractConfig::default();
        let tokens = scan::scan(src);
        let tags = scan::find_tags(src);
        extract_wordlist(&tokens, &tags, &cfg)
    }

    fn word_strings(src: &str) -> Vec<String> {
        words(src).into_iter().map(|e| e.word).collect()
    }

    #[test]
    fn meta_description_words() {
        let got =
            word_strings(r#"<meta name="description" content="Online marketplace for premium products" />"#);
        for expected in ["online", "marketplace", "premium", "products"] {
            assert!(got.contains(&expected.to_string()), "missing {expected}");
        }
        // "for" is a stop-word
        assert!(!got.contains(&"for".to_string()));
    }

    #[test]
    fn comments_are_harvested() {
        let got = word_strings("// Validate the checkout basket totals");
        assert!(got.contains(&"checkout".to_string()));
        assert!(got.contains(&"basket".to_string()));
        assert!(!got.contains(&"the".to_string()));
    }

    #[test]
    fn identifier_subwords() {
        let got = word_strings("userAccountBalance, shipping_address");
        for expected in ["user", "account", "balance", "shipping", "address"] {
            assert!(got.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn keywords_and_short_tokens_are_filtered() {
        let got = word_strings("// function io id summary");
        assert!(!got.contains(&"function".to_string()));
        assert!(!got.contains(&"io".to_string()));
        assert!(got.contains(&"summary".to_string()));
    }

    #[test]
    fn denylist_check_is_case_insensitive() {
        let got = word_strings("// The Function Catalogue");
        assert!(!got.contains(&"the".to_string()));
        assert!(!got.contains(&"function".to_string()));
        assert!(got.contains(&"catalogue".to_string()));
    }

    #[test]
    fn edge_punctuation_is_stripped() {
        let got = word_strings(r#"<img alt="(discounted!) 50% off: sneakers." />"#);
        assert!(got.contains(&"discounted".to_string()));
        assert!(got.contains(&"sneakers".to_string()));
        assert!(got.contains(&"off".to_string()));
    }

    #[test]
    fn frequency_counts_per_unit() {
        let got = words("// basket basket basket");
        let entry = got.iter().find(|e| e.word == "basket").unwrap();
        assert_eq!(entry.count, 3);
        assert_eq!(entry.sources.as_slice(), &[WordSource::Comment]);
    }

    #[test]
    fn title_and_aria_label_sources() {
        let got = words(r#"<button title="Submit order" aria-label="Confirm purchase"></button>"#);
        let order = got.iter().find(|e| e.word == "order").unwrap();
        assert!(order.sources.contains(&WordSource::Title));
        let purchase = got.iter().find(|e| e.word == "purchase").unwrap();
        assert!(purchase.sources.contains(&WordSource::AriaLabel));
    }
}

//! URL pattern reconstruction. Finds string-concatenation chains and
//! template literals that build path strings, and normalizes every dynamic
//! segment to one canonical placeholder so that two expressions differing
//! only in identifier names produce the identical pattern.
//!
//! This is pattern matching over source text, not AST evaluation: inputs are
//! frequently fragments that would not parse as standalone programs.

use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter;
use crate::scan::{Token, TokenKind};

// One concatenation term: a quoted string, a template literal, a number, or
// an identifier-ish expression (member chains, optional one-level call).
const TERM: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`|\d+|[A-Za-z_$][A-Za-z0-9_$]*(?:\.[A-Za-z_$][A-Za-z0-9_$]*)*(?:\([^()]*\))?"#;

static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TERM).unwrap());

static CHAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?:{TERM})(?:\s*\+\s*(?:{TERM}))+")).unwrap());

/// Reconstruct URL path templates from a source unit. `tokens` must be the
/// lexer output for `src`; comment spans are used to suppress matches inside
/// commented-out code, template tokens supply the standalone-template shape.
pub fn extract_url_patterns(src: &str, tokens: &[Token], placeholder: &str) -> Vec<String> {
    let comment_spans: Vec<(usize, usize)> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| (t.start, t.end))
        .collect();

    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    let mut chain_spans: Vec<(usize, usize)> = Vec::new();

    for m in CHAIN_RE.find_iter(src) {
        if in_spans(&comment_spans, m.start()) {
            continue;
        }
        if let Some(pattern) = normalize_chain(m.as_str(), placeholder) {
            chain_spans.push((m.start(), m.end()));
            if !filter::is_asset_path(&pattern) && seen.insert(pattern.clone()) {
                out.push(pattern);
            }
        }
    }

    // standalone templates not already consumed as a chain term
    for tok in tokens {
        if tok.kind != TokenKind::Template || in_spans(&chain_spans, tok.start) {
            continue;
        }
        let (pattern, substitutions, literal_has_slash) = render_template(&tok.text, placeholder);
        if substitutions > 0 && literal_has_slash {
            let pattern = pattern.trim().to_string();
            if !filter::is_asset_path(&pattern) && seen.insert(pattern.clone()) {
                out.push(pattern);
            }
        }
    }

    out.sort();
    out
}

fn in_spans(spans: &[(usize, usize)], pos: usize) -> bool {
    spans.iter().any(|&(a, b)| pos >= a && pos < b)
}

/// Normalize one `a + b + c` chain. Returns a pattern only when at least one
/// literal fragment carries a `/` (the URL anchor) and at least one term is
/// dynamic; a chain of pure literals is plain string data, not a template.
fn normalize_chain(chain: &str, placeholder: &str) -> Option<String> {
    let mut pattern = String::new();
    let mut literal_has_slash = false;
    let mut dynamic_terms = 0usize;

    for m in TERM_RE.find_iter(chain) {
        let term = m.as_str();
        match term.bytes().next() {
            Some(b'"') | Some(b'\'') => {
                let inner = unescape(&term[1..term.len() - 1]);
                if inner.contains('/') {
                    literal_has_slash = true;
                }
                pattern.push_str(&inner);
            }
            Some(b'`') => {
                let (rendered, substitutions, has_slash) =
                    render_template(&term[1..term.len() - 1], placeholder);
                literal_has_slash |= has_slash;
                dynamic_terms += substitutions;
                pattern.push_str(&rendered);
            }
            Some(b) if b.is_ascii_digit() => {
                // numbers are literals, concatenated verbatim: "/v" + 2 -> /v2
                pattern.push_str(term);
            }
            _ => {
                // identifier, member chain or call: any unresolvable term is
                // treated as a placeholder rather than aborting the chain
                dynamic_terms += 1;
                pattern.push_str(placeholder);
            }
        }
    }

    if literal_has_slash && dynamic_terms > 0 {
        Some(pattern.trim().to_string())
    } else {
        None
    }
}

/// Render a template literal body: literal parts verbatim (escapes folded),
/// each `${...}` replaced by the placeholder. Returns the rendered string,
/// the substitution count, and whether any literal part contained `/`.
fn render_template(body: &str, placeholder: &str) -> (String, usize, bool) {
    let bytes = body.as_bytes();
    let len = bytes.len();
    let mut rendered = String::new();
    let mut substitutions = 0usize;
    let mut has_slash = false;
    let mut i = 0;

    while i < len {
        if bytes[i] == b'\\' && i + 1 < len {
            // fold the escape, keeping the full escaped char
            let ch_len = utf8_len(bytes[i + 1]);
            rendered.push_str(&body[i + 1..(i + 1 + ch_len).min(len)]);
            i += 1 + ch_len;
        } else if bytes[i] == b'$' && i + 1 < len && bytes[i + 1] == b'{' {
            let mut depth = 1usize;
            i += 2;
            while i < len && depth > 0 {
                match bytes[i] {
                    b'{' => depth += 1,
                    b'}' => depth -= 1,
                    _ => {}
                }
                i += 1;
            }
            rendered.push_str(placeholder);
            substitutions += 1;
        } else {
            if bytes[i] == b'/' {
                has_slash = true;
            }
            // push the full char, not the byte, to stay UTF-8 clean
            let ch_len = utf8_len(bytes[i]);
            rendered.push_str(&body[i..(i + ch_len).min(len)]);
            i += ch_len;
        }
    }

    (rendered, substitutions, has_slash)
}

fn utf8_len(first: u8) -> usize {
    match first {
        b if b < 0x80 => 1,
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        _ => 2,
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

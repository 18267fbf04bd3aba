//! Hand-written scanner for best-effort JS/HTML fragments. Inputs are often
//! minified bundles or snippets that would never parse as standalone
//! programs, so this is a tolerant lexer, not a grammar: it classifies the
//! constructs the analyzers care about and skips everything else. It never
//! fails; an unterminated literal is emitted with whatever span exists at EOF.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single- or double-quoted string literal (text is the inner content).
    Str,
    /// Backtick template literal (text is the raw inner content, `${...}`
    /// spans included verbatim).
    Template,
    /// Line or block comment (text is the body without delimiters).
    Comment,
    /// Identifier run. Hyphens are allowed mid-run so HTML attribute-style
    /// names like `data-user` survive as one token.
    Ident,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of the token's first delimiter/character in the source.
    pub start: usize,
    /// Byte offset one past the token's last byte (delimiters included).
    pub end: usize,
}

/// Tokenize a source blob. Total: any input, including invalid UTF-8-free
/// garbage and the empty string, yields a (possibly empty) token list.
pub fn scan(src: &str) -> Vec<Token> {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < len {
        let b = bytes[i];
        match b {
            b'"' | b'\'' => {
                let (tok, next) = scan_quoted(src, i, b);
                tokens.push(tok);
                i = next;
            }
            b'`' => {
                let (tok, next) = scan_template(src, i);
                tokens.push(tok);
                i = next;
            }
            b'/' if i + 1 < len && bytes[i + 1] == b'/' => {
                let end = src[i + 2..]
                    .find('\n')
                    .map(|off| i + 2 + off)
                    .unwrap_or(len);
                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: src[i + 2..end].to_string(),
                    start: i,
                    end,
                });
                i = end;
            }
            b'/' if i + 1 < len && bytes[i + 1] == b'*' => {
                let (body_end, end) = match src[i + 2..].find("*/") {
                    Some(off) => (i + 2 + off, i + 2 + off + 2),
                    None => (len, len), // unterminated: truncate at EOF
                };
                tokens.push(Token {
                    kind: TokenKind::Comment,
                    text: src[i + 2..body_end].to_string(),
                    start: i,
                    end,
                });
                i = end;
            }
            _ if b.is_ascii_alphabetic() || b == b'_' => {
                let mut j = i + 1;
                while j < len && is_ident_continue(bytes[j]) {
                    j += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Ident,
                    text: src[i..j].to_string(),
                    start: i,
                    end: j,
                });
                i = j;
            }
            _ => i += 1,
        }
    }

    tokens
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn scan_quoted(src: &str, start: usize, quote: u8) -> (Token, usize) {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut j = start + 1;
    while j < len {
        if bytes[j] == b'\\' {
            j = (j + 2).min(len);
        } else if bytes[j] == quote {
            let tok = Token {
                kind: TokenKind::Str,
                text: src[start + 1..j].to_string(),
                start,
                end: j + 1,
            };
            return (tok, j + 1);
        } else {
            j += 1;
        }
    }
    // unterminated: keep what we found
    let tok = Token {
        kind: TokenKind::Str,
        text: src[start + 1..len].to_string(),
        start,
        end: len,
    };
    (tok, len)
}

fn scan_template(src: &str, start: usize) -> (Token, usize) {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut j = start + 1;
    while j < len {
        match bytes[j] {
            b'\\' => j = (j + 2).min(len),
            b'$' if j + 1 < len && bytes[j + 1] == b'{' => {
                // skip the interpolation span; its expression text is opaque
                let mut depth = 1usize;
                j += 2;
                while j < len && depth > 0 {
                    match bytes[j] {
                        b'{' => depth += 1,
                        b'}' => depth -= 1,
                        _ => {}
                    }
                    j += 1;
                }
            }
            b'`' => {
                let tok = Token {
                    kind: TokenKind::Template,
                    text: src[start + 1..j].to_string(),
                    start,
                    end: j + 1,
                };
                return (tok, j + 1);
            }
            _ => j += 1,
        }
    }
    let tok = Token {
        kind: TokenKind::Template,
        text: src[start + 1..len].to_string(),
        start,
        end: len,
    };
    (tok, len)
}

/// Blank out every comment span with spaces, preserving byte offsets. Used
/// by the parameter extractor so commented-out code contributes nothing.
pub fn mask_comments(src: &str, tokens: &[Token]) -> String {
    let mut bytes = src.as_bytes().to_vec();
    for tok in tokens {
        if tok.kind == TokenKind::Comment {
            for b in &mut bytes[tok.start..tok.end] {
                *b = b' ';
            }
        }
    }
    // comment spans start and end at ASCII delimiters, so any multi-byte
    // character is either fully inside a span or fully outside it
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, String)> {
        scan(src)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn strings_and_escapes() {
        let toks = kinds(r#"fetch("/api/\"v1\"/users")"#);
        assert!(toks.contains(&(TokenKind::Ident, "fetch".into())));
        assert!(toks.contains(&(TokenKind::Str, r#"/api/\"v1\"/users"#.into())));
    }

    #[test]
    fn template_with_interpolation_is_one_token() {
        let toks = kinds("`/api/${version}/users`");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0], (TokenKind::Template, "/api/${version}/users".into()));
    }

    #[test]
    fn unterminated_literal_truncates_at_eof() {
        let toks = kinds("const s = \"never closed");
        assert!(toks.contains(&(TokenKind::Str, "never closed".into())));
        let toks = kinds("`also ${open");
        assert_eq!(toks[0].0, TokenKind::Template);
    }

    #[test]
    fn comments() {
        let toks = kinds("// premium checkout flow\n/* beta\nfeature */");
        assert_eq!(toks[0], (TokenKind::Comment, " premium checkout flow".into()));
        assert_eq!(toks[1], (TokenKind::Comment, " beta\nfeature ".into()));
    }

    #[test]
    fn hyphen_idents_survive() {
        let toks = kinds("data-user-id");
        assert_eq!(toks[0], (TokenKind::Ident, "data-user-id".into()));
    }

    #[test]
    fn url_inside_string_is_not_a_comment() {
        let toks = kinds(r#"const u = "https://example.com/a";"#);
        assert!(toks.iter().all(|(k, _)| *k != TokenKind::Comment));
    }

    #[test]
    fn mask_comments_preserves_offsets() {
        let src = "let a = 1; // let hidden = 2;";
        let toks = scan(src);
        let masked = mask_comments(src, &toks);
        assert_eq!(masked.len(), src.len());
        assert!(!masked.contains("hidden"));
        assert!(masked.starts_with("let a = 1; "));
    }
}

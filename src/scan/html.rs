//! Sub-scan for HTML opening tags embedded in source text. Tags routinely
//! arrive inside JS string literals (`"<input name=\"q\">"`), so attribute
//! parsing tolerates backslash-escaped quotes. Scanning the raw unit text
//! also makes plain HTML documents valid inputs.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)((?:\s+[^<>]*)?)/?>").unwrap());

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_][a-zA-Z0-9_.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

#[derive(Debug, Clone)]
pub struct HtmlTag {
    /// Tag name, lowercased.
    pub name: String,
    /// Attribute name/value pairs in document order. Valueless (boolean)
    /// attributes are skipped; none of the attributes we mine are boolean.
    pub attrs: Vec<(String, String)>,
}

impl HtmlTag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Find everything that looks like an HTML opening tag with attributes.
pub fn find_tags(text: &str) -> Vec<HtmlTag> {
    let mut tags = Vec::new();
    for cap in TAG_RE.captures_iter(text) {
        let name = cap[1].to_lowercase();
        let raw_attrs = cap.get(2).map(|m| m.as_str()).unwrap_or("");
        if raw_attrs.trim().is_empty() {
            continue;
        }
        // JS-escaped quotes would defeat the attr regex; normalize first
        let unescaped = raw_attrs.replace("\\\"", "\"").replace("\\'", "'");
        let mut attrs = Vec::new();
        for acap in ATTR_RE.captures_iter(&unescaped) {
            let key = acap[1].to_string();
            let value = acap
                .get(2)
                .or_else(|| acap.get(3))
                .or_else(|| acap.get(4))
                .map(|m| m.as_str())
                .unwrap_or("")
                .to_string();
            attrs.push((key, value));
        }
        if !attrs.is_empty() {
            tags.push(HtmlTag { name, attrs });
        }
    }
    tags
}

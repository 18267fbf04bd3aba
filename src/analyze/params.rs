//! Candidate parameter-name extraction from four independent syntactic
//! contexts. Names are deduplicated case-sensitively (`userId` and `UserId`
//! are different API parameters) and every context that matched is kept as
//! provenance.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;

use crate::scan::{self, HtmlTag, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamContext {
    ObjectKey,
    VariableDeclaration,
    HtmlField,
    FunctionParam,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterName {
    pub name: String,
    pub contexts: SmallVec<[ParamContext; 4]>,
}

// identifier or quoted key immediately followed by `:` after `{` or `,`
static OBJ_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[{,]\s*(?:"([^"]+)"|'([^']+)'|([A-Za-z_$][A-Za-z0-9_$]*))\s*:"#).unwrap()
});

static VAR_DECL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:let|const|var)\s+([A-Za-z_$][A-Za-z0-9_$]*)").unwrap());

static FUNC_PARAMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfunction\b\s*[A-Za-z_$]?[A-Za-z0-9_$]*\s*\(([^)]*)\)").unwrap());

static ARROW_PARAMS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)\s*=>").unwrap());

static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Union of the four context scans. `tokens` is the lexer output for `src`
/// (used to mask comments), `tags` the HTML sub-scan of the same text.
pub fn extract_parameters(src: &str, tokens: &[Token], tags: &[HtmlTag]) -> Vec<ParameterName> {
    let mut found: AHashMap<String, SmallVec<[ParamContext; 4]>> = AHashMap::new();
    let mut add = |name: &str, ctx: ParamContext| {
        if name.is_empty() {
            return;
        }
        let contexts = found.entry(name.to_string()).or_default();
        if !contexts.contains(&ctx) {
            contexts.push(ctx);
        }
    };

    // commented-out code must not contribute candidates
    let masked = scan::mask_comments(src, tokens);

    for cap in OBJ_KEY_RE.captures_iter(&masked) {
        let key = cap
            .get(1)
            .or_else(|| cap.get(2))
            .or_else(|| cap.get(3))
            .map(|m| m.as_str())
            .unwrap_or("");
        add(key, ParamContext::ObjectKey);
    }

    for cap in VAR_DECL_RE.captures_iter(&masked) {
        add(&cap[1], ParamContext::VariableDeclaration);
    }

    for re in [&*FUNC_PARAMS_RE, &*ARROW_PARAMS_RE] {
        for cap in re.captures_iter(&masked) {
            for raw in cap[1].split(',') {
                // strip default values and rest syntax, keep only the name
                let name = raw.split('=').next().unwrap_or("").trim();
                let name = name.trim_start_matches("...").trim();
                if IDENT_RE.is_match(name) {
                    add(name, ParamContext::FunctionParam);
                }
            }
        }
    }

    for tag in tags {
        for (key, value) in &tag.attrs {
            let lk = key.to_lowercase();
            if lk == "name" || lk == "id" || lk.starts_with("data-") {
                // hyphenated/dotted values stay verbatim: `date-of-birth`
                // is one candidate, not three
                add(value.trim(), ParamContext::HtmlField);
            }
        }
    }

    let mut out: Vec<ParameterName> = found
        .into_iter()
        .map(|(name, contexts)| ParameterName { name, contexts })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

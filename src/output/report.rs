//! Flat interchange shape for downstream tooling (wordlist files, fuzzers,
//! scanners). Rendering collapses provenance down to plain string arrays;
//! callers that need contexts or counts use `ExtractionResult` directly.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::analyze::ExtractionResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub label: String,
    pub url_patterns: Vec<String>,
    pub parameters: Vec<String>,
    pub wordlist: Vec<String>,
}

impl Report {
    pub fn from_result(label: impl Into<String>, result: &ExtractionResult) -> Self {
        Self {
            label: label.into(),
            url_patterns: result.url_patterns.clone(),
            parameters: result.parameters.iter().map(|p| p.name.clone()).collect(),
            wordlist: result.wordlist.iter().map(|w| w.word.clone()).collect(),
        }
    }
}

pub fn write_json<W: Write>(mut w: W, report: &Report) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(report)?;
    w.write_all(body.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Append one line per report, for multi-unit batch runs.
pub fn write_jsonl(path: &Path, reports: &[Report]) -> anyhow::Result<()> {
    let mut f = OpenOptions::new().append(true).create(true).open(path)?;
    for report in reports {
        let line = serde_json::to_string(report)?;
        f.write_all(line.as_bytes())?;
        f.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::{extract, SourceUnit};
    use crate::config::ExtractConfig;

    #[test]
    fn camel_case_keys() {
        let unit = SourceUnit::new("a.js", r#"fetch("/api/" + v + "/users");"#);
        let result = extract(&unit, &ExtractConfig::default());
        let report = Report::from_result(unit.label.as_str(), &result);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""urlPatterns":["/api/EXPR/users"]"#));
        assert!(json.contains(r#""label":"a.js""#));
    }

    #[test]
    fn write_json_to_buffer() {
        let report = Report {
            label: "x".into(),
            url_patterns: vec![],
            parameters: vec!["q".into()],
            wordlist: vec![],
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();
        let parsed: Report = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.parameters, vec!["q"]);
    }
}

//! Fallback locator: embedded JSON transcript arrays.
//!
//! Some landing pages inline their player configuration as a JSON blob that
//! carries a `"transcript": [...]` field. We search the raw page text for that
//! fragment and pull the entries out, without attempting to parse the
//! surrounding document.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Matches a `"transcript": [...]` fragment. The array body is deliberately
/// limited to non-`]` characters: transcript arrays on these pages are flat
/// lists of strings or shallow objects.
fn transcript_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)"transcript"\s*:\s*(\[[^\]]*\])"#).expect("transcript pattern is valid")
    })
}

/// Search raw page text for a JSON transcript array and return its entries.
///
/// Entries may be plain strings or objects carrying a `text` or `body` field.
/// Returns `None` when no fragment is found, the fragment is not valid JSON,
/// or no entry yields text.
pub fn extract(html: &str) -> Option<Vec<String>> {
    let captures = transcript_re().captures(html)?;
    let payload: Value = serde_json::from_str(captures.get(1)?.as_str()).ok()?;

    let items = payload.as_array()?;
    let mut lines = Vec::new();
    for item in items {
        match item {
            Value::String(s) => lines.push(s.clone()),
            Value::Object(map) => {
                let text = map.get("text").or_else(|| map.get("body"));
                if let Some(Value::String(s)) = text {
                    lines.push(s.clone());
                }
            }
            _ => {}
        }
    }

    if lines.is_empty() { None } else { Some(lines) }
}

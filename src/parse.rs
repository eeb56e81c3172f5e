// src/parse.rs
//
// Structured-response parser: best-effort recovery of a key/value record
// from free-form transcription-model output. The model is asked for a
// structured object but routinely wraps it in code fences, prefixes it
// with commentary, or mangles it outright.

use serde_json::Value;

use crate::schema::{Record, field};

/// Language hints models stick after an opening code fence.
const LANGUAGE_HINTS: [&str; 2] = ["json", "python"];

/// Total version of [`try_parse_mapping`]: when no structured object can
/// be recovered, the raw text is preserved under `occurrenceRemarks` so
/// nothing is silently lost.
pub fn parse_structured_response(raw: &str) -> Record {
    try_parse_mapping(raw).unwrap_or_else(|| fallback_record(raw))
}

/// Locate and parse the embedded key/value object. Strips code fences and
/// a language-hint token, then takes the widest `{...}` span (first `{` to
/// last `}`) and parses it strictly as a JSON object. `None` when no such
/// object exists — callers decide whether to fall back or report.
pub fn try_parse_mapping(raw: &str) -> Option<Record> {
    let cleaned = strip_fences(raw);
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }

    let value: Value = serde_json::from_str(&cleaned[start..=end]).ok()?;
    let object = value.as_object()?;

    let mut record = Record::with_capacity(object.len());
    for (key, value) in object {
        record.insert(key.clone(), scalar_to_string(value));
    }
    Some(record)
}

/// Degraded single-field record carrying the unparsable text.
pub fn fallback_record(raw: &str) -> Record {
    let mut record = Record::new();
    record.insert(s!(field::OCCURRENCE_REMARKS), s!(raw));
    record
}

/// Trim backtick fences from both ends, plus one language-hint token left
/// behind by the opening fence.
fn strip_fences(raw: &str) -> &str {
    let text = raw.trim().trim_matches('`').trim_start();
    for hint in LANGUAGE_HINTS {
        if let Some(rest) = strip_hint(text, hint) {
            return rest.trim_start();
        }
    }
    text
}

fn strip_hint<'a>(text: &'a str, hint: &str) -> Option<&'a str> {
    let head = text.get(..hint.len())?;
    if !head.eq_ignore_ascii_case(hint) {
        return None;
    }
    let rest = &text[hint.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Draft-record values are opaque strings downstream; scalars render
/// plainly, nested values keep their JSON form.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => s!(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    }
}

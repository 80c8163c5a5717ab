//! Input document decoders
//!
//! Turns raw text into a JSON value tree for the inference pipeline.

use super::types::InputFormat;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use once_cell::sync::Lazy;
use regex::Regex;

static KEY_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\b[\w.-]+)=("[^"]*"|'[^']*'|\S+)"#).expect("key=value pattern is valid")
});

static KEY_ASSIGNMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+=").expect("key assignment pattern is valid"));

static INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern is valid"));

static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?[0-9]*\.[0-9]+$").expect("decimal pattern is valid"));

/// Decode a document body in the given format
pub fn decode_document(body: &str, format: InputFormat) -> Result<JsonValue> {
    match format {
        InputFormat::Json => decode_json(body),
        InputFormat::Jsonl => decode_jsonl(body),
        InputFormat::Yaml => decode_yaml(body),
        InputFormat::Tsv => decode_tsv(body),
        InputFormat::Log => Ok(decode_log(body)),
    }
}

/// Guess the format of a document from its content.
///
/// Checked in order: a complete JSON document, JSON Lines, `key=value` log
/// lines, tab-separated rows, YAML. Empty input counts as JSON.
pub fn detect_format(body: &str) -> InputFormat {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return InputFormat::Json;
    }

    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if bracketed && serde_json::from_str::<JsonValue>(trimmed).is_ok() {
        return InputFormat::Json;
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    if looks_like_jsonl(&lines) {
        return InputFormat::Jsonl;
    }

    if lines.iter().any(|line| KEY_ASSIGNMENT_REGEX.is_match(line)) {
        return InputFormat::Log;
    }

    let half = (lines.len() / 2).max(1);
    let tab_lines = lines.iter().filter(|line| line.contains('\t')).count();
    if tab_lines >= half {
        return InputFormat::Tsv;
    }

    if serde_json::from_str::<JsonValue>(trimmed).is_ok() {
        return InputFormat::Json;
    }

    InputFormat::Yaml
}

fn looks_like_jsonl(lines: &[&str]) -> bool {
    let mut non_blank = lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty());
    non_blank.clone().count() > 1
        && non_blank.all(|line| {
            line.starts_with('{') && serde_json::from_str::<JsonValue>(line).is_ok()
        })
}

// ============================================================================
// JSON
// ============================================================================

fn decode_json(body: &str) -> Result<JsonValue> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("invalid JSON: {e}")))
}

// ============================================================================
// JSONL
// ============================================================================

fn decode_jsonl(body: &str) -> Result<JsonValue> {
    let mut records = Vec::new();

    for (line_num, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: JsonValue = serde_json::from_str(line).map_err(|e| {
            Error::decode(format!("invalid JSONL at line {}: {e}", line_num + 1))
        })?;

        records.push(value);
    }

    Ok(JsonValue::Array(records))
}

// ============================================================================
// YAML
// ============================================================================

fn decode_yaml(body: &str) -> Result<JsonValue> {
    serde_yaml::from_str(body).map_err(|e| Error::decode(format!("invalid YAML: {e}")))
}

// ============================================================================
// TSV
// ============================================================================

/// One object per data row, keyed by the header row. Values stay strings.
fn decode_tsv(body: &str) -> Result<JsonValue> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = reader.records();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header
            .map_err(|e| Error::decode(format!("invalid TSV header: {e}")))?
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if name.is_empty() {
                    format!("col_{}", idx + 1)
                } else {
                    name.to_string()
                }
            })
            .collect(),
        None => return Ok(JsonValue::Array(Vec::new())),
    };

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            Error::decode(format!("invalid TSV at line {line}: {e}"))
        })?;

        // whitespace-only line
        if row.len() == 1 && row.get(0) == Some("") {
            continue;
        }

        let record: JsonObject = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = row.get(idx).unwrap_or_default();
                (header.clone(), JsonValue::String(value.to_string()))
            })
            .collect();
        records.push(JsonValue::Object(record));
    }

    Ok(JsonValue::Array(records))
}

// ============================================================================
// Log
// ============================================================================

/// One object per non-blank line.
///
/// A line holding a JSON object is taken as is. Otherwise its `key=value`
/// pairs become fields, and a line with no pairs becomes `{"message": line}`.
fn decode_log(body: &str) -> JsonValue {
    let records = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| JsonValue::Object(decode_log_line(line)))
        .collect();

    JsonValue::Array(records)
}

fn decode_log_line(line: &str) -> JsonObject {
    if line.starts_with('{') {
        if let Ok(JsonValue::Object(obj)) = serde_json::from_str(line) {
            return obj;
        }
    }

    let mut record: JsonObject = KEY_VALUE_REGEX
        .captures_iter(line)
        .map(|caps| {
            let value = unquote(&caps[2]);
            (caps[1].to_string(), parse_scalar(value))
        })
        .collect();

    if record.is_empty() {
        record.insert("message".to_string(), JsonValue::String(line.to_string()));
    }
    record
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Interpret a bare log value: null, booleans and numbers are recognised,
/// anything else stays a string.
fn parse_scalar(value: &str) -> JsonValue {
    let trimmed = value.trim();
    match trimmed {
        "" => return JsonValue::String(String::new()),
        "null" | "~" => return JsonValue::Null,
        "true" => return JsonValue::Bool(true),
        "false" => return JsonValue::Bool(false),
        _ => {}
    }

    if INTEGER_REGEX.is_match(trimmed) {
        if let Ok(n) = trimmed.parse::<i64>() {
            return JsonValue::from(n);
        }
    }
    if INTEGER_REGEX.is_match(trimmed) || DECIMAL_REGEX.is_match(trimmed) {
        if let Some(n) = trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
        {
            return JsonValue::Number(n);
        }
    }

    JsonValue::String(unquote(trimmed).to_string())
}

//! Shaping of the analyze reply into a fully populated [`AnalysisResult`].
//!
//! The model is asked for a single JSON object but frequently wraps it in a
//! code fence, drops keys, or replies with prose. [`normalize`] absorbs all of
//! that: the fence is stripped, each expected key is decoded independently
//! with a named default, and a reply that cannot be parsed at all collapses
//! into the fixed error result. Callers never see a partially shaped value.

use newslens_common::NewslensError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const SUMMARY_DEFAULT: &str = "Could not extract summary.";
const SUMMARY_ERROR: &str = "Could not process article.";
const REWRITE_DEFAULT: &str = "Rewrite not available.";
const LABEL_DEFAULT: &str = "Unknown";

/// Structured editorial analysis of one article.
///
/// `perspective_label` and `tone` carry whatever string the model produced;
/// downstream rendering treats them as opaque display text, so novel labels
/// are passed through rather than rejected. `tone_color` is always derived
/// here and never read from the model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub perspective_label: String,
    pub tone: String,
    pub tone_color: String,
    pub emotion_score: BTreeMap<String, f64>,
    pub rewritten: String,
}

impl AnalysisResult {
    /// The fixed result substituted when the model call or its parsing fails.
    pub fn error_result() -> Self {
        Self {
            summary: SUMMARY_ERROR.to_string(),
            perspective_label: LABEL_DEFAULT.to_string(),
            tone: LABEL_DEFAULT.to_string(),
            tone_color: tone_color(LABEL_DEFAULT).to_string(),
            emotion_score: zeroed_emotions(),
            rewritten: REWRITE_DEFAULT.to_string(),
        }
    }
}

/// Presentation hint for a tone label. Unmapped tones render as "secondary".
pub fn tone_color(tone: &str) -> &'static str {
    match tone {
        "Neutral" => "secondary",
        "Angry" => "danger",
        "Fearful" => "purple",
        "Hopeful" => "success",
        _ => "secondary",
    }
}

fn zeroed_emotions() -> BTreeMap<String, f64> {
    ["anger", "fear", "joy", "surprise"]
        .into_iter()
        .map(|k| (k.to_string(), 0.0))
        .collect()
}

/// Shape a raw model reply into a complete [`AnalysisResult`].
///
/// Parse failure is fatal-but-local: it is logged and yields
/// [`AnalysisResult::error_result`], never an error to the caller.
pub fn normalize(raw_text: &str) -> AnalysisResult {
    match decode_object(raw_text) {
        Ok(fields) => shape(&fields),
        Err(err) => {
            tracing::warn!(error = %err, "analysis reply did not parse, using error result");
            AnalysisResult::error_result()
        }
    }
}

/// Strip the fence and parse the reply as a single JSON object.
fn decode_object(raw_text: &str) -> Result<Map<String, Value>, NewslensError> {
    let cleaned = strip_code_fence(raw_text);
    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(NewslensError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(err) => Err(NewslensError::MalformedResponse(err.to_string())),
    }
}

fn shape(fields: &Map<String, Value>) -> AnalysisResult {
    let string_or = |key: &str, default: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    };

    let tone = string_or("tone", LABEL_DEFAULT);

    // Partial emotion objects are kept as-is; only a missing object gets the
    // zeroed default. Non-numeric entries are dropped.
    let emotion_score = match fields.get("emotion_score").and_then(Value::as_object) {
        Some(scores) => scores
            .iter()
            .filter_map(|(k, v)| v.as_f64().map(|f| (k.clone(), f)))
            .collect(),
        None => zeroed_emotions(),
    };

    AnalysisResult {
        summary: string_or("summary", SUMMARY_DEFAULT),
        perspective_label: string_or("perspective_label", LABEL_DEFAULT),
        tone_color: tone_color(&tone).to_string(),
        tone,
        emotion_score,
        rewritten: string_or("rewritten", REWRITE_DEFAULT),
    }
}

/// Remove one surrounding ``` fence, tolerating a language tag on the opener.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // The opening fence line may carry a tag like "json"; drop the whole line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    let body = body.trim();
    body.strip_suffix("```").map(str::trim_end).unwrap_or(body)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

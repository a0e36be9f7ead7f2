//! Envelope classification: every SRFax response is `{"Status": ..., "Result": ...}`.
//!
//! On success `Result` holds operation-specific data (object, list or scalar); on
//! failure it is a single error string. The classifier decides which case applies by
//! looking at `Status` alone and never needs to know the success shape.

use serde_json::{Map, Value};

pub(crate) const STATUS_KEY: &str = "Status";
pub(crate) const RESULT_KEY: &str = "Result";

/// Untyped response object as parsed from the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEnvelope(Map<String, Value>);

impl RawEnvelope {
    /// Parse a response body. Bodies that are not a JSON object are rejected.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self(map))
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawEnvelope {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// The response violates the `{Status, Result}` contract itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed envelope: {0}")]
pub struct MalformedEnvelope(pub String);

/// SRFax reported the call as failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status}: {raw}")]
pub struct ResultError {
    /// `Status` value exactly as sent (e.g. `Failed`).
    pub status: String,
    /// Unformatted error message from `Result`.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error(transparent)]
    Malformed(#[from] MalformedEnvelope),

    #[error(transparent)]
    Failed(#[from] ResultError),
}

/// Decide whether the call succeeded.
///
/// `Ok(())` means the caller may decode `Result`. Status comparison ignores case,
/// and a successful envelope is accepted with or without a `Result` key.
pub fn classify(envelope: &RawEnvelope) -> Result<(), EnvelopeError> {
    let status = match envelope.get(STATUS_KEY) {
        None => return Err(MalformedEnvelope("missing Status key".to_owned()).into()),
        Some(Value::String(status)) => status,
        Some(other) => {
            return Err(MalformedEnvelope(format!(
                "Status not a string, got {}",
                json_type_name(other)
            ))
            .into());
        }
    };

    if status.eq_ignore_ascii_case("success") {
        return Ok(());
    }

    match envelope.get(RESULT_KEY) {
        Some(Value::String(raw)) => Err(ResultError {
            status: status.clone(),
            raw: raw.clone(),
        }
        .into()),
        _ => Err(MalformedEnvelope("Result missing or not a string".to_owned()).into()),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Structural decoder for the `Result` payload of a successful envelope.
//!
//! SRFax is inconsistent about whether a field arrives as a JSON string or a JSON
//! number (`EpochTime` and `Pages` switch between the two across operations), so
//! every destination field declares a [`FieldKind`] and values are coerced into it.
//! Each operation describes its result with a static [`FieldSpec`] table instead of
//! a hand-written decoder.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::envelope::{RESULT_KEY, RawEnvelope, STATUS_KEY};

/// Declared type of a destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    /// A nested object.
    Record(&'static [FieldSpec]),
    /// A list of nested objects.
    Records(&'static [FieldSpec]),
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Record(_) => "record",
            Self::Records(_) => "list of records",
        }
    }
}

/// Maps one wire key onto one destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Destination field name, used to read the value back from a [`DecodedRecord`].
    pub field: &'static str,
    /// Key as sent by SRFax. Matched exactly first, then ignoring ASCII case.
    pub key: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn string(field: &'static str, key: &'static str) -> Self {
        Self {
            field,
            key,
            kind: FieldKind::String,
        }
    }

    pub const fn integer(field: &'static str, key: &'static str) -> Self {
        Self {
            field,
            key,
            kind: FieldKind::Integer,
        }
    }

    pub const fn record(
        field: &'static str,
        key: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            field,
            key,
            kind: FieldKind::Record(fields),
        }
    }

    pub const fn records(
        field: &'static str,
        key: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            field,
            key,
            kind: FieldKind::Records(fields),
        }
    }
}

/// A value after coercion into its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Record(DecodedRecord),
    Records(Vec<DecodedRecord>),
}

/// Coerced fields of one object, keyed by destination field name.
///
/// Only fields present on the wire (and not `null`) are stored; the accessors
/// return the zero value for anything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedRecord {
    values: BTreeMap<&'static str, FieldValue>,
}

impl DecodedRecord {
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn string(&mut self, field: &str) -> String {
        self.optional_string(field).unwrap_or_default()
    }

    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.values.remove(field) {
            Some(FieldValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn integer(&mut self, field: &str) -> i64 {
        match self.values.remove(field) {
            Some(FieldValue::Integer(value)) => value,
            _ => 0,
        }
    }

    pub fn record<R: DecodeRecord>(&mut self, field: &str) -> Option<R> {
        match self.values.remove(field) {
            Some(FieldValue::Record(record)) => Some(R::from_record(record)),
            _ => None,
        }
    }

    pub fn records<R: DecodeRecord>(&mut self, field: &str) -> Vec<R> {
        match self.values.remove(field) {
            Some(FieldValue::Records(records)) => {
                records.into_iter().map(R::from_record).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// A typed record with a static field-mapping table.
pub trait DecodeRecord: Sized {
    const FIELDS: &'static [FieldSpec];

    fn from_record(record: DecodedRecord) -> Self;
}

/// A type the whole `Result` payload can be decoded into.
pub trait FromResult: Sized {
    const KIND: FieldKind;

    /// Build the value; `None` means `Result` was absent or `null`.
    fn from_value(value: Option<FieldValue>) -> Self;
}

impl FromResult for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_value(value: Option<FieldValue>) -> Self {
        match value {
            Some(FieldValue::String(value)) => value,
            _ => String::new(),
        }
    }
}

impl FromResult for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn from_value(value: Option<FieldValue>) -> Self {
        match value {
            Some(FieldValue::Integer(value)) => value,
            _ => 0,
        }
    }
}

impl<R: DecodeRecord> FromResult for Vec<R> {
    const KIND: FieldKind = FieldKind::Records(R::FIELDS);

    fn from_value(value: Option<FieldValue>) -> Self {
        match value {
            Some(FieldValue::Records(records)) => {
                records.into_iter().map(R::from_record).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Decoded payload plus the source keys nothing was mapped to.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    /// Paths such as `Result[0].Extra`; SRFax adds undocumented fields at will.
    pub unused_keys: Vec<String>,
}

/// A present value could not be coerced into the declared kind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("cannot decode {field}: expected {expected}, got {actual}")]
pub struct DecodeError {
    /// Path of the offending value, e.g. `Result[2].Pages`.
    pub field: String,
    pub expected: &'static str,
    pub actual: Value,
}

/// Decode `Result` of an envelope already classified as successful.
pub fn decode_result<T: FromResult>(envelope: &RawEnvelope) -> Result<Decoded<T>, DecodeError> {
    let mut unused_keys = envelope
        .keys()
        .filter(|key| *key != STATUS_KEY && *key != RESULT_KEY)
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let value = match envelope.get(RESULT_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => Some(coerce(RESULT_KEY, &T::KIND, value, &mut unused_keys)?),
    };

    if !unused_keys.is_empty() {
        tracing::debug!(
            count = unused_keys.len(),
            keys = ?unused_keys,
            "response carried unmapped keys"
        );
    }

    Ok(Decoded {
        value: T::from_value(value),
        unused_keys,
    })
}

fn coerce(
    path: &str,
    kind: &FieldKind,
    value: &Value,
    unused_keys: &mut Vec<String>,
) -> Result<FieldValue, DecodeError> {
    let mismatch = || DecodeError {
        field: path.to_owned(),
        expected: kind.name(),
        actual: value.clone(),
    };

    match kind {
        FieldKind::String => coerce_string(value).map(FieldValue::String).ok_or_else(mismatch),
        FieldKind::Integer => coerce_integer(value).map(FieldValue::Integer).ok_or_else(mismatch),
        FieldKind::Record(fields) => match value {
            Value::Object(map) => Ok(FieldValue::Record(decode_record(
                path,
                fields,
                map,
                unused_keys,
            )?)),
            Value::Array(items) if items.len() == 1 => match &items[0] {
                Value::Object(map) => Ok(FieldValue::Record(decode_record(
                    &format!("{path}[0]"),
                    fields,
                    map,
                    unused_keys,
                )?)),
                Value::Null => Ok(FieldValue::Record(DecodedRecord::default())),
                _ => Err(mismatch()),
            },
            _ => Err(mismatch()),
        },
        FieldKind::Records(fields) => match value {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    // A `null` item still counts as a record, with every field at its default.
                    if item.is_null() {
                        records.push(DecodedRecord::default());
                        continue;
                    }
                    let item_path = format!("{path}[{idx}]");
                    let Value::Object(map) = item else {
                        return Err(DecodeError {
                            field: item_path,
                            expected: FieldKind::Record(fields).name(),
                            actual: item.clone(),
                        });
                    };
                    records.push(decode_record(&item_path, fields, map, unused_keys)?);
                }
                Ok(FieldValue::Records(records))
            }
            Value::Object(map) => Ok(FieldValue::Records(vec![decode_record(
                &format!("{path}[0]"),
                fields,
                map,
                unused_keys,
            )?])),
            _ => Err(mismatch()),
        },
    }
}

fn decode_record(
    path: &str,
    fields: &[FieldSpec],
    map: &Map<String, Value>,
    unused_keys: &mut Vec<String>,
) -> Result<DecodedRecord, DecodeError> {
    let mut record = DecodedRecord::default();
    let mut matched = Vec::<&str>::with_capacity(fields.len());

    for spec in fields {
        let Some((key, value)) = lookup(map, spec.key) else {
            continue;
        };
        matched.push(key);
        if value.is_null() {
            continue;
        }
        let field_path = format!("{path}.{key}");
        let decoded = coerce(&field_path, &spec.kind, value, unused_keys)?;
        record.values.insert(spec.field, decoded);
    }

    unused_keys.extend(
        map.keys()
            .filter(|key| !matched.contains(&key.as_str()))
            .map(|key| format!("{path}.{key}")),
    );

    Ok(record)
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<(&'a str, &'a Value)> {
    if let Some((found, value)) = map.get_key_value(key) {
        return Some((found.as_str(), value));
    }
    map.iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
        .map(|(found, value)| (found.as_str(), value))
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(value) => Some(value.clone()),
        // `f64` Display never uses exponent notation: 1e20 renders as all its digits.
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => Some(float.to_string()),
            _ => Some(number.to_string()),
        },
        Value::Bool(flag) => Some(if *flag { "1" } else { "0" }.to_owned()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                return Some(value);
            }
            // Floats are accepted only when they carry no fraction.
            let float = number.as_f64()?;
            let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
            (float.fract() == 0.0 && in_range).then_some(float as i64)
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Some(0);
            }
            trimmed.parse::<i64>().ok()
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null => Some(0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Lenient field decoders for the normalized XML tree
//!
//! Result files from different engine versions disagree on which attributes
//! are present, so leaf fields never fail decoding: unexpected shapes fall
//! back to empty values.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::xml::TEXT_KEY;

fn value_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(mut fields) => fields
            .remove(TEXT_KEY)
            .map(value_text)
            .unwrap_or_default(),
        Value::Array(items) => items.into_iter().next().map(value_text).unwrap_or_default(),
        Value::Null => String::new(),
    }
}

/// Decode any scalar (or `#text` object) as a string
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

/// Decode a count, treating anything non-numeric as zero
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = value_text(Value::deserialize(deserializer)?);
    let raw = raw.trim();
    Ok(raw
        .parse::<u64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n as u64)
        })
        .unwrap_or(0))
}

/// Decode an optional JSON number; strings and other shapes become `None`
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// Decode an optional whole JSON number, accepting integral floats like `5.0`
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() < 9.0e15)
            .map(|n| n as i64)
    }))
}

/// Decode a tag enum, falling back to its default for unexpected shapes
pub(crate) fn tag<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Decode an optional nested record; non-object shapes become `None`
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().find(Value::is_object),
        object @ Value::Object(_) => Some(object),
        _ => None,
    };
    value
        .map(|v| serde_json::from_value(v).map_err(D::Error::custom))
        .transpose()
}

/// Decode a canonicalized collection field
///
/// Collection fields are arrays once [`crate::xml::canonicalize`] has run;
/// anything else means the tree skipped normalization.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(D::Error::custom(format!(
            "expected a normalized sequence, found {other}"
        ))),
    }
}

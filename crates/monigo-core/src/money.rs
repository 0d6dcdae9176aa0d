//! Decimal helpers for monetary and quantity fields.
//!
//! The API encodes amounts as decimal strings. Optional amounts may be absent,
//! `null`, or an empty string; all three decode to `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Accepted encodings of an optional decimal.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeDecimal {
    Text(String),
    Number(Decimal),
}

/// Deserialize an optional decimal, treating `null` and `""` as `None`.
///
/// Use with `#[serde(default, deserialize_with = "crate::money::optional")]`.
///
/// # Errors
///
/// Returns an error if a non-empty string is not a valid decimal.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<MaybeDecimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(MaybeDecimal::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(MaybeDecimal::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(MaybeDecimal::Number(value)) => Ok(Some(value)),
    }
}

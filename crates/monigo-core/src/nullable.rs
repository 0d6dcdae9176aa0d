//! Lists that the API may send as `null`.

use serde::{Deserialize, Deserializer};

/// Deserialize a list, treating `null` as empty.
///
/// Use with `#[serde(default, deserialize_with = "crate::nullable::vec")]`.
///
/// # Errors
///
/// Returns an error if the value is neither `null` nor a list of `T`.
pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

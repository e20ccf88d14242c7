//! Serde helper for fields where an absent key and `null` differ.
//!
//! Use on an `Option<Option<T>>` field together with
//! `#[serde(default, skip_serializing_if = "Option::is_none")]`:
//! `None` is an absent key, `Some(None)` is `null`, `Some(Some(v))` is a value.
//! Serialization needs no helper; `Some(None)` already writes `null`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Borrows the value of a nullable field, folding absent and `null` together.
pub fn get<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}

/// Field that may be absent, `null`, or set.
pub type Nullable<T> = Option<Option<T>>;

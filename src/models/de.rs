//! Deserialization helpers shared by the models

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`. Slack sends `null` for fields it has no
/// value for, where the schema would otherwise say string/bool/number.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `Default`.
/// `#[serde(default)]` only covers a field that is missing entirely,
/// so use both on fields where `null` is possible.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

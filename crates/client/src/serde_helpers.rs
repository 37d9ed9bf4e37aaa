//! Serde helpers for Grafana's loosely typed JSON.
//!
//! Responsibilities:
//! - Treat an explicit JSON `null` the same as a missing field.
//!
//! Explicitly does NOT handle:
//! - Coercing between types; fields that genuinely vary in type are
//!   modelled as `serde_json::Value` instead.
//!
//! Invariants / assumptions:
//! - Grafana emits `null` for empty lists and unset strings depending on
//!   version and on how the dashboard was created.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

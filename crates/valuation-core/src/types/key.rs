//! Cache keys.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between key components.
pub const DELIMITER: &str = " @ ";

/// Opaque string identifying one cacheable dataset.
///
/// Keys are built by joining ordered components (file path, year, month,
/// node, series tag) with [`DELIMITER`]. The store never looks inside a key;
/// composition rules belong to the vendor adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Join ordered components into a key.
    pub fn join<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                key.push_str(DELIMITER);
            }
            key.push_str(part.as_ref());
        }
        Self(key)
    }

    /// Wrap a pre-built, already delimited key without modification.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Sub-key for one series of a multi-series dataset.
    pub fn child(&self, suffix: &str) -> Self {
        Self(format!("{}{}{}", self.0, DELIMITER, suffix))
    }

    /// Split the key back into its components.
    pub fn parts(&self) -> Vec<&str> {
        self.0.split(DELIMITER).collect()
    }

    /// Get the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CacheKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CacheKey {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<String> for CacheKey {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_uses_delimiter() {
        let key = CacheKey::join(["data/MISO", "2015", "3", "AEC", "LMP"]);
        assert_eq!(key.as_str(), "data/MISO @ 2015 @ 3 @ AEC @ LMP");
    }

    #[test]
    fn test_join_is_deterministic() {
        let a = CacheKey::join(["data/PJM", "2016", "5", "1", "SPP"]);
        let b = CacheKey::join(vec![
            "data/PJM".to_string(),
            "2016".to_string(),
            "5".to_string(),
            "1".to_string(),
            "SPP".to_string(),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_child_matches_join() {
        let base = CacheKey::join(["ccp.csv", "12"]);
        assert_eq!(base.child("REGUP"), CacheKey::join(["ccp.csv", "12", "REGUP"]));
    }

    #[test]
    fn test_raw_and_structured_keys_are_equal() {
        let raw = CacheKey::from_raw("spp.xlsx @ 12 @ HB_HOUSTON");
        let built = CacheKey::join(["spp.xlsx", "12", "HB_HOUSTON"]);
        assert_eq!(raw, built);
        assert_eq!(raw.parts(), vec!["spp.xlsx", "12", "HB_HOUSTON"]);
    }

    #[test]
    fn test_distinct_components_do_not_collide() {
        let a = CacheKey::join(["root", "2015", "1", "11"]);
        let b = CacheKey::join(["root", "2015", "11", "1"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let key = CacheKey::join(["a", "b"]);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"a @ b\"");
    }
}

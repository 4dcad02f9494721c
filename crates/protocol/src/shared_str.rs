use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An immutable, reference-counted string.
///
/// Command lists repeat the same titles, alt texts, and source paths on
/// every render pass; wrapping `Arc<str>` makes each `.clone()` a refcount
/// bump instead of a fresh allocation. Compares transparently against
/// `&str` so tests can assert on literals.
#[derive(Debug, Clone, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for SharedStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for SharedStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::hash::Hash for SharedStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl Default for SharedStr {
    fn default() -> Self {
        SharedStr(Arc::from(""))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize via String rather than &str: content JSON routinely
        // contains escapes, which borrowed deserialization rejects.
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr(Arc::from(s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_shallow() {
        let a = SharedStr::from("Craft <em>fast</em>");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, "Craft <em>fast</em>");
    }

    #[test]
    fn compares_with_str() {
        let s = SharedStr::from("showcase");
        assert_eq!(s, "showcase");
        assert!(s != "other");
    }

    #[test]
    fn default_is_empty() {
        assert!(SharedStr::default().is_empty());
    }

    #[test]
    fn deserializes_escaped_json() {
        let s: SharedStr = serde_json::from_str(r#""a \"quoted\" title""#).expect("deserialize");
        assert_eq!(s, r#"a "quoted" title"#);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&SharedStr::from("vitrine")).expect("serialize");
        assert_eq!(json, "\"vitrine\"");
    }
}

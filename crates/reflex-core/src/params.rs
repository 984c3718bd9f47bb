#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters handed to a node when it is built.
///
/// Keys are unique, values are textual, and the map is not meant to change
/// after construction; nodes keep what they parsed out of it, not the map
/// itself. A value written as `{name}` is a live blackboard reference rather
/// than a literal (see [`is_blackboard_pattern`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeParams {
    values: BTreeMap<String, String>,
}

impl NodeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; later writes to the same key win.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for NodeParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Whether a parameter value is a blackboard reference (`{name}`) instead of
/// a literal.
pub fn is_blackboard_pattern(value: &str) -> bool {
    blackboard_key(value).is_some()
}

/// The blackboard key named by a `{name}` value, or `None` for a literal.
pub fn blackboard_key(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('{')?.strip_suffix('}')?;
    if inner.is_empty() || inner.contains(['{', '}']) {
        return None;
    }
    Some(inner)
}

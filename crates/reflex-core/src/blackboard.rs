use std::any::Any;
use std::collections::BTreeMap;

/// Shared key-value store a tree reads and writes while it runs.
///
/// Keys are plain names so that node parameters can reference entries
/// textually (see [`crate::params`]). Values are dynamically typed; reading a
/// key with the wrong type is a programming error and panics rather than
/// silently returning `None`.
#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<String, Box<dyn Any>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set<T: 'static>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        let value = self.values.get(key)?;
        value.downcast_ref::<T>().or_else(|| {
            panic!("blackboard type mismatch for key `{key}` (stored type differs from requested)")
        })
    }

    pub fn get_mut<T: 'static>(&mut self, key: &str) -> Option<&mut T> {
        let value = self.values.get_mut(key)?;
        value.downcast_mut::<T>().or_else(|| {
            panic!("blackboard type mismatch for key `{key}` (stored type differs from requested)")
        })
    }

    pub fn remove<T: 'static>(&mut self, key: &str) -> Option<T> {
        let value = self.values.remove(key)?;
        value.downcast::<T>().map(|b| *b).ok().or_else(|| {
            panic!("blackboard type mismatch for key `{key}` (stored type differs from requested)")
        })
    }

    /// Textual view of a `String` entry.
    ///
    /// This is the lookup dynamically bound node parameters go through, once
    /// per tick. Returns `None` when the key is absent; panics on a
    /// non-`String` entry like every other typed accessor.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.get::<String>(key).map(|s| s.as_str())
    }
}

//! Ordered command tree and empty-value normalization

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value held by a command entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// Command seen with no sub-commands yet. Builder-internal marker;
    /// normalization rewrites it before a tree leaves the conversion.
    Empty,
    /// Nested sub-commands
    Children(CommandTree),
}

/// Ordered mapping from command text to its sub-command value.
///
/// Keys keep first-insertion order and are unique per level. Lookups are
/// linear; levels in device configs are small.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandTree {
    entries: Vec<(String, NodeValue)>,
}

impl CommandTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of direct entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&NodeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Insert with map semantics: an existing key keeps its position and the
    /// replaced value is returned.
    pub fn insert(&mut self, key: String, value: NodeValue) -> Option<NodeValue> {
        for (k, v) in &mut self.entries {
            if *k == key {
                return Some(std::mem::replace(v, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Rewrite every `Empty` marker into an empty `Children` container,
    /// recursively. Idempotent; afterwards every value at every depth is a
    /// container.
    pub fn normalize(&mut self) {
        for (_, value) in &mut self.entries {
            match value {
                NodeValue::Empty => *value = NodeValue::Children(CommandTree::new()),
                NodeValue::Children(children) => children.normalize(),
            }
        }
    }

    /// True when no `Empty` marker survives at any depth.
    pub fn is_normalized(&self) -> bool {
        self.entries.iter().all(|(_, value)| match value {
            NodeValue::Empty => false,
            NodeValue::Children(children) => children.is_normalized(),
        })
    }
}

impl Serialize for CommandTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for NodeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Serializes like a normalized empty container, so the sentinel
            // can never leak through the serialized form.
            NodeValue::Empty => serializer.serialize_map(Some(0))?.end(),
            NodeValue::Children(children) => children.serialize(serializer),
        }
    }
}

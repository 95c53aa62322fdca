//! Partitioning a normalized tree into independently addressable units

use std::fmt;

use itertools::Itertools;

use crate::domain::tree::{CommandTree, NodeValue};

/// How a tree is split into partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// One partition per direct child of the root
    #[default]
    ByTopLevel,
    /// One partition per leaf, keyed by the full root-to-leaf command path
    ByLeafPath,
}

/// The value a partition's name is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionKey {
    /// A single top-level command
    TopLevel(String),
    /// Ordered command path from the root down to a leaf
    Path(Vec<String>),
}

impl PartitionKey {
    /// Byte sequence fed to the name digest. Path components are joined with
    /// a newline, which cannot occur inside a single command line, so the
    /// joined form is unambiguous.
    pub fn digest_input(&self) -> String {
        match self {
            PartitionKey::TopLevel(command) => command.clone(),
            PartitionKey::Path(path) => path.iter().join("\n"),
        }
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKey::TopLevel(command) => write!(f, "{command}"),
            PartitionKey::Path(path) => write!(f, "{}", path.iter().join(" / ")),
        }
    }
}

/// One independently addressable unit of a split tree.
///
/// Owns a deep clone of its subtree; partitions share no structure with each
/// other or with the source tree, so downstream consumers can update them
/// concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub key: PartitionKey,
    /// The normalized subtree rooted at the partition's key/path end
    pub subtree: CommandTree,
}

impl Partition {
    /// Self-describing single-chain container for the partition's full key
    /// path. For a top-level partition this is the subtree itself (already a
    /// single-key container); for a path partition the subtree is wrapped in
    /// one nesting level per path component.
    pub fn chain(&self) -> CommandTree {
        match &self.key {
            PartitionKey::TopLevel(_) => self.subtree.clone(),
            PartitionKey::Path(path) => {
                let mut current = self.subtree.clone();
                for component in path.iter().rev() {
                    let mut wrapper = CommandTree::new();
                    wrapper.insert(component.clone(), NodeValue::Children(current));
                    current = wrapper;
                }
                current
            }
        }
    }
}

/// Split a normalized tree into partitions, in tree insertion order.
pub fn partition(tree: &CommandTree, strategy: PartitionStrategy) -> Vec<Partition> {
    match strategy {
        PartitionStrategy::ByTopLevel => tree
            .iter()
            .map(|(command, value)| {
                let mut subtree = CommandTree::new();
                subtree.insert(command.to_string(), value.clone());
                Partition {
                    key: PartitionKey::TopLevel(command.to_string()),
                    subtree,
                }
            })
            .collect(),
        PartitionStrategy::ByLeafPath => {
            let mut partitions = Vec::new();
            let mut path = Vec::new();
            collect_leaves(tree, &mut path, &mut partitions);
            partitions
        }
    }
}

fn collect_leaves(tree: &CommandTree, path: &mut Vec<String>, out: &mut Vec<Partition>) {
    for (command, value) in tree.iter() {
        path.push(command.to_string());
        match value {
            NodeValue::Children(children) if !children.is_empty() => {
                collect_leaves(children, path, out);
            }
            NodeValue::Children(children) => out.push(Partition {
                key: PartitionKey::Path(path.clone()),
                subtree: children.clone(),
            }),
            // Unnormalized input: treat the marker as the empty leaf it means.
            NodeValue::Empty => out.push(Partition {
                key: PartitionKey::Path(path.clone()),
                subtree: CommandTree::new(),
            }),
        }
        path.pop();
    }
}

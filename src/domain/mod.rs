//! Domain layer: line classification, tree building, partitioning
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod error;
pub mod line;
pub mod partition;
pub mod tree;

pub use builder::{build_tree, TreeBuilder};
pub use error::{TreeBuildError, TreeBuildResult};
pub use line::{ConfigLine, Dialect, LineClassifier, LineKind};
pub use partition::{partition, Partition, PartitionKey, PartitionStrategy};
pub use tree::{CommandTree, NodeValue};

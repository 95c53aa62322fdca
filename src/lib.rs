//! Split indentation-structured device configurations into independently
//! named, deterministically addressable artifacts.
//!
//! Raw config text is classified line by line, assembled into an ordered
//! command tree, normalized to a uniform container shape, partitioned by
//! top-level command or by leaf path, and each partition gets a
//! content-derived, length-bounded resource name.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{convert, ConfigArtifact, ConvertOptions, NamedPartition};
pub use domain::{
    build_tree, CommandTree, Dialect, NodeValue, Partition, PartitionKey, PartitionStrategy,
    TreeBuildError,
};

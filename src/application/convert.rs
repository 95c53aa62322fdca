//! Conversion entry point: raw config text to named partitions

use tracing::{debug, instrument};

use crate::application::naming::{resource_name, DEFAULT_MAX_NAME_LEN};
use crate::domain::{build_tree, partition, Dialect, Partition, PartitionStrategy, TreeBuildResult};

/// Caller-supplied knobs for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub strategy: PartitionStrategy,
    /// Owner prefix for derived names (may be empty)
    pub owner_prefix: String,
    /// Opaque endpoint identifier, copied unchanged into every named
    /// partition for the layer that applies the artifacts
    pub endpoint: String,
    /// Maximum length of a derived resource name
    pub max_name_len: usize,
    pub dialect: Dialect,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strategy: PartitionStrategy::default(),
            owner_prefix: String::new(),
            endpoint: String::new(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
            dialect: Dialect::default(),
        }
    }
}

/// One named unit of converter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPartition {
    pub name: String,
    /// Pass-through endpoint identifier
    pub endpoint: String,
    pub partition: Partition,
}

/// Convert raw config text into an ordered sequence of named partitions.
///
/// Pure and synchronous; two calls with identical input produce byte-identical
/// output. Any failure aborts with no partial result.
#[instrument(level = "debug", skip(text, options))]
pub fn convert(text: &str, options: &ConvertOptions) -> TreeBuildResult<Vec<NamedPartition>> {
    let tree = build_tree(text, options.dialect.clone())?;
    let partitions = partition(&tree, options.strategy);
    debug!(partitions = partitions.len(), "partitioned command tree");

    let named = partitions
        .into_iter()
        .map(|partition| {
            let name = resource_name(&options.owner_prefix, &partition.key, options.max_name_len);
            debug!(name = %name, key = %partition.key, "named partition");
            NamedPartition {
                name,
                endpoint: options.endpoint.clone(),
                partition,
            }
        })
        .collect();
    Ok(named)
}

//! Serializable artifact documents for named partitions

use serde::Serialize;

use crate::application::convert::NamedPartition;
use crate::domain::CommandTree;

/// Output document for one named partition.
///
/// `commands` carries the partition's full self-describing chain, so the
/// document can be applied on its own. `remove_container` is the reconciler's
/// deletion flag and is always emitted as false here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigArtifact {
    pub name: String,
    pub endpoint: String,
    pub remove_container: bool,
    pub commands: CommandTree,
}

impl ConfigArtifact {
    pub fn from_partition(named: &NamedPartition) -> Self {
        Self {
            name: named.name.clone(),
            endpoint: named.endpoint.clone(),
            remove_container: false,
            commands: named.partition.chain(),
        }
    }
}

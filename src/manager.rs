use crate::error::SnapshotError;
use crate::process::tree::{ProcessTree, RootPolicy};

pub mod builder;
pub mod snapshot;

use snapshot::ProcessSource;


#[derive(Debug)]

//Manager struct declaration: one snapshot, linked into a tree
pub struct Manager {
    tree: ProcessTree,
}

impl Manager {
    /// Takes a single snapshot from `source` and builds the tree from it.
    /// No output may be produced before this returns.
    pub fn load<S: ProcessSource>(source: &S, policy: RootPolicy) -> Result<Self, SnapshotError> {
        let snapshot = source.snapshot()?;
        let tree = builder::build_process_tree(snapshot, policy)?;
        Ok(Manager { tree })
    }

    pub fn process_count(&self) -> usize {
        self.tree.len()
    }

    pub fn tree(&self) -> &ProcessTree {
        &self.tree
    }
}

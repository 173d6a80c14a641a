use std::collections::HashMap;
use std::ops::Index;

use tracing::trace;

use crate::process::Process; //Import the base Process struct

/// Index of a node inside the `ProcessTree` arena.
pub type NodeId = usize;

/// What to do with a record whose parent is not in the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPolicy {
    /// Fold it under the first record ever inserted (the synthetic root).
    /// The first record the OS reports is not necessarily an ancestor of
    /// everything else, so this is an approximation of the real hierarchy.
    #[default]
    FirstSeen,
    /// Make it the root of its own tree.
    Forest,
}

//Represents a node in the process tree hierarchy.
//Children are arena indices, always greater than the node's own index.
#[derive(Debug, Clone)]
pub struct ProcessNode {
    pub process: Process,
    pub children: Vec<NodeId>,
}

impl ProcessNode {
    pub fn new(process: Process) -> Self {
        ProcessNode {
            process,
            children: Vec::new(),
        }
    }
}

/// Append-only arena of every record in the snapshot, linked into a forest.
#[derive(Debug, Default)]
pub struct ProcessTree {
    nodes: Vec<ProcessNode>,
    by_pid: HashMap<u32, NodeId>,
    roots: Vec<NodeId>,
    policy: RootPolicy,
}

impl ProcessTree {
    pub fn new(policy: RootPolicy) -> Self {
        ProcessTree {
            policy,
            ..Default::default()
        }
    }

    /// Adds `process` to the flat list and links it under its parent.
    ///
    /// The parent is looked up among the records inserted before this one;
    /// when several share the id, the earliest wins. A record whose parent
    /// is missing is handled per `RootPolicy`. Under `FirstSeen`, a missing
    /// parent with `process_id == 0` leaves the record unattached.
    pub fn attach(&mut self, process: Process) -> NodeId {
        let id = self.nodes.len();
        let parent = self.by_pid.get(&process.parent_id).copied();
        let pid = process.process_id;

        self.nodes.push(ProcessNode::new(process));
        self.by_pid.entry(pid).or_insert(id);

        match (parent, self.policy) {
            (Some(parent), _) => self.link(parent, id),
            (None, RootPolicy::Forest) => self.roots.push(id),
            (None, RootPolicy::FirstSeen) if id == 0 => self.roots.push(id),
            (None, RootPolicy::FirstSeen) if pid != 0 => self.link(0, id),
            (None, RootPolicy::FirstSeen) => {
                trace!(node = id, "pid 0 with no parent left unattached");
            }
        }

        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(parent < child, "a child is always inserted after its parent");
        self.nodes[parent].children.push(child);
    }

    /// Nodes printed at depth 0, in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[cfg(test)]
    pub fn nodes(&self) -> &[ProcessNode] {
        &self.nodes
    }
}

impl Index<NodeId> for ProcessTree {
    type Output = ProcessNode;

    fn index(&self, id: NodeId) -> &ProcessNode {
        &self.nodes[id]
    }
}

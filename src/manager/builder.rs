use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::process::tree::{ProcessTree, RootPolicy};
use crate::process::{Process, ProcessDescriptor};

//Building the process tree in one pass over the snapshot, in the order the OS reported it.
//The first iteration error aborts the walk; the snapshot is dropped on return.
pub fn build_process_tree<I>(descriptors: I, policy: RootPolicy) -> Result<ProcessTree, SnapshotError>
where
    I: IntoIterator<Item = Result<ProcessDescriptor, SnapshotError>>,
{
    let mut tree = ProcessTree::new(policy);

    for descriptor in descriptors {
        tree.attach(Process::from(descriptor?));
    }

    if tree.is_empty() {
        warn!("process snapshot was empty");
    }
    debug!(processes = tree.len(), roots = tree.roots().len(), "process tree built");
    Ok(tree)
}

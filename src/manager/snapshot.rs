use procfs::process::ProcessesIter;
use procfs::{ProcError, ProcResult};
use tracing::debug;

use crate::error::SnapshotError;
use crate::process::ProcessDescriptor;

/// A provider of one-shot process snapshots.
///
/// The returned iterator owns whatever OS handle backs the snapshot and
/// releases it when dropped.
pub trait ProcessSource {
    type Snapshot: Iterator<Item = Result<ProcessDescriptor, SnapshotError>>;

    fn snapshot(&self) -> Result<Self::Snapshot, SnapshotError>;
}

/// Reads the live process list from `/proc`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcfsSource;

impl ProcessSource for ProcfsSource {
    type Snapshot = ProcfsSnapshot;

    fn snapshot(&self) -> Result<Self::Snapshot, SnapshotError> {
        let procfs_processes = procfs::process::all_processes() //Reading intial process list
            .map_err(SnapshotError::Unavailable)?;

        debug!("process snapshot acquired");
        Ok(ProcfsSnapshot {
            inner: procfs_processes,
        })
    }
}

/// Walk over `/proc`, one descriptor per listed process.
pub struct ProcfsSnapshot {
    inner: ProcessesIter,
}

impl Iterator for ProcfsSnapshot {
    type Item = Result<ProcessDescriptor, SnapshotError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = self
                .inner
                .next()?
                .and_then(|procfs_proc| ProcessDescriptor::try_from(&procfs_proc));

            if let Some(item) = classify(read) {
                return Some(item);
            }
        }
    }
}

/// Sorts one `/proc` read into a descriptor, a skip (`None`) or a failure.
fn classify(read: ProcResult<ProcessDescriptor>) -> Option<Result<ProcessDescriptor, SnapshotError>> {
    match read {
        Ok(descriptor) => Some(Ok(descriptor)),
        //A process vanished between listing and reading its data
        Err(ProcError::NotFound(path)) => {
            debug!(?path, "process exited during snapshot, skipping");
            None
        }
        Err(e) => Some(Err(SnapshotError::Iteration(e))),
    }
}

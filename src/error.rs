//! Error types and the exit codes they map to.

use procfs::ProcError;
use std::io;
use thiserror::Error;

/// Exit code reported when the process snapshot cannot be taken or read.
pub const SNAPSHOT_FAILURE_EXIT_CODE: u8 = 84;

/// Exit code for every other failure (output stream, logger set-up).
pub const GENERIC_FAILURE_EXIT_CODE: u8 = 1;

/// Failures of the process snapshot boundary.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The OS refused to produce a snapshot at all.
    #[error("An error while taking snapshot of the system: {0}")]
    Unavailable(#[source] ProcError),

    /// Enumerating the snapshot failed for a reason other than exhaustion.
    #[error("An error occurred while reading process info: {0}")]
    Iteration(#[source] ProcError),
}

/// Top-level error of the binary.
#[derive(Error, Debug)]
pub enum PstreeError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Failed to write process tree: {0}")]
    Output(#[from] io::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

impl PstreeError {
    pub fn exit_code(&self) -> u8 {
        match self {
            PstreeError::Snapshot(_) => SNAPSHOT_FAILURE_EXIT_CODE,
            PstreeError::Output(_) | PstreeError::LogFilter(_) | PstreeError::Logger(_) => {
                GENERIC_FAILURE_EXIT_CODE
            }
        }
    }
}

pub type PstreeResult<T> = Result<T, PstreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_failures_use_distinguished_exit_code() {
        let unavailable: PstreeError =
            SnapshotError::Unavailable(ProcError::Other("no /proc".to_string())).into();
        let iteration: PstreeError =
            SnapshotError::Iteration(ProcError::Other("bad entry".to_string())).into();

        assert_eq!(unavailable.exit_code(), SNAPSHOT_FAILURE_EXIT_CODE);
        assert_eq!(iteration.exit_code(), SNAPSHOT_FAILURE_EXIT_CODE);
    }

    #[test]
    fn output_failure_is_not_a_snapshot_failure() {
        let err: PstreeError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert_eq!(err.exit_code(), GENERIC_FAILURE_EXIT_CODE);
    }

    #[test]
    fn messages_keep_their_wording() {
        let err = SnapshotError::Unavailable(ProcError::Other("no /proc".to_string()));
        assert!(
            err.to_string()
                .starts_with("An error while taking snapshot of the system")
        );

        let err = SnapshotError::Iteration(ProcError::Other("bad entry".to_string()));
        assert!(
            err.to_string()
                .starts_with("An error occurred while reading process info")
        );
    }
}

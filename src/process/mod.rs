use procfs::{
    process::Process as ProcfsProcess,
    ProcError,
};
use tracing::warn;

pub mod tree;

/// Longest process name a record holds, in characters.
pub const NAME_MAX_LEN: usize = 259;

/// Appended to a name that had to be cut down to `NAME_MAX_LEN`.
pub const TRUNCATION_MARKER: char = '~';


// Raw descriptor as read from the snapshot

/// One process exactly as the OS reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    pub name: String,
    pub pid: u32,
    pub parent_pid: u32,
}

impl ProcessDescriptor {
    pub fn new(name: impl Into<String>, pid: u32, parent_pid: u32) -> Self {
        ProcessDescriptor {
            name: name.into(),
            pid,
            parent_pid,
        }
    }
}

impl TryFrom<&ProcfsProcess> for ProcessDescriptor {
    type Error = ProcError;

    fn try_from(procfs_proc: &ProcfsProcess) -> Result<Self, Self::Error> {
        let stat = procfs_proc.stat()?;

        Ok(ProcessDescriptor::new(stat.comm, stat.pid as u32, stat.ppid as u32))
    }
}


// Normalized record

/// Represents a single process in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub process_id: u32,
    pub parent_id: u32,
    pub name: String,
}

impl From<ProcessDescriptor> for Process {
    fn from(descriptor: ProcessDescriptor) -> Self {
        Process {
            process_id: descriptor.pid,
            parent_id: descriptor.parent_pid,
            name: bound_name(descriptor.name, descriptor.pid),
        }
    }
}

/// Cuts `name` to `NAME_MAX_LEN` characters, marking the cut.
fn bound_name(name: String, pid: u32) -> String {
    if name.chars().count() <= NAME_MAX_LEN {
        return name;
    }

    warn!(pid, len = name.chars().count(), "process name truncated");
    let mut bounded: String = name.chars().take(NAME_MAX_LEN - 1).collect();
    bounded.push(TRUNCATION_MARKER);
    bounded
}

mod error;
mod logger;
mod manager;
mod printer;
mod process;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use error::{PstreeError, PstreeResult, GENERIC_FAILURE_EXIT_CODE};
use manager::snapshot::{ProcessSource, ProcfsSource};
use manager::Manager;
use printer::{TreePrinter, INDENT};
use process::tree::RootPolicy;

/// Print the running processes as a tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print processes whose parent is not running as separate trees
    /// instead of folding them under the first process listed
    #[arg(long)]
    forest: bool,

    /// Log filter, e.g. "debug" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn root_policy(&self) -> RootPolicy {
        if self.forest {
            RootPolicy::Forest
        } else {
            RootPolicy::FirstSeen
        }
    }
}

/// Takes one snapshot from `source` and writes the summary and tree to `out`.
///
/// The whole tree is built before the first byte is written, so a failed
/// snapshot leaves `out` untouched.
fn run<S: ProcessSource, W: Write>(source: &S, policy: RootPolicy, out: W) -> PstreeResult<()> {
    let manager = Manager::load(source, policy)?;

    let mut printer = TreePrinter::new(out, INDENT);
    printer.print_summary(manager.process_count())?;
    printer.print_forest(manager.tree())?;
    printer.finish()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logger::init_logger(args.log_level.as_deref()) {
        eprintln!("{e}");
        return ExitCode::from(GENERIC_FAILURE_EXIT_CODE);
    }

    let stdout = BufWriter::new(io::stdout().lock());
    match run(&ProcfsSource, args.root_policy(), stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, &mut io::stderr().lock()),
    }
}

/// Writes the failure message once to `err_out` and picks the exit code.
fn report_failure<W: Write>(e: &PstreeError, err_out: &mut W) -> ExitCode {
    debug!(error = ?e, "pstree failed");
    let _ = writeln!(err_out, "{e}");
    ExitCode::from(e.exit_code())
}

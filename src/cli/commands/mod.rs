//! Command implementations for the sales analytics CLI
//!
//! Each command lives in its own module; `shared` holds the statistics
//! type and logging setup they have in common.

pub mod process;
pub mod shared;

pub use shared::PipelineStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Dispatch to the appropriate subcommand handler
///
/// Running with no subcommand is equivalent to `process` with default
/// arguments.
pub async fn run(args: Args) -> Result<PipelineStats> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args).await,
    }
}

//! Shared components for CLI commands
//!
//! Common statistics types and logging setup used by the command
//! implementations.

use crate::cli::args::ProcessArgs;
use crate::Result;
use tracing::debug;

/// End-to-end pipeline statistics for final reporting
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Raw data lines read from the input file
    pub lines_read: usize,
    /// Lines successfully parsed into typed records
    pub records_parsed: usize,
    /// Lines dropped as malformed during parsing
    pub lines_dropped: usize,
    /// Records rejected by business-rule validation
    pub records_invalid: usize,
    /// Records remaining after validation and filtering
    pub records_accepted: usize,
    /// Records matched against the product catalog
    pub records_enriched: usize,
    /// Total pipeline wall time
    pub processing_time: std::time::Duration,
}

impl PipelineStats {
    /// Enrichment success rate as a percentage of accepted records
    pub fn enrichment_rate(&self) -> f64 {
        if self.records_accepted == 0 {
            return 0.0;
        }
        (self.records_enriched as f64 / self.records_accepted as f64) * 100.0
    }
}

/// Set up structured logging for the process command
///
/// Idempotent: when a subscriber is already installed the existing one is
/// kept, so repeated invocations in one process do not panic.
pub fn setup_logging(args: &ProcessArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_analytics={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

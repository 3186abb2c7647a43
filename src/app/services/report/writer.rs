//! Report file output

use std::fs;
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Write the rendered report to disk, creating parent directories as needed
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create directory {}", parent.display()),
                e,
            )
        })?;
    }

    fs::write(path, report)
        .map_err(|e| Error::io(format!("Failed to write report {}", path.display()), e))?;

    info!("Report written to {}", path.display());
    Ok(())
}

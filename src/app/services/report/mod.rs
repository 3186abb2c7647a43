//! Fixed-layout text report generation
//!
//! Renders the full analytics report as a sectioned text document and
//! writes it to disk. By design this module recomputes its statistics
//! from the record collections instead of reusing the analytics service:
//! presentation stays decoupled from the pure aggregation functions.

pub mod format;
pub mod render;
pub mod writer;

#[cfg(test)]
mod tests;

pub use render::render_report;
pub use writer::write_report;

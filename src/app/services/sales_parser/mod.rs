//! Record parser for pipe-delimited sales transaction lines
//!
//! Turns raw text lines into typed [`Transaction`](crate::Transaction)
//! records. A line is accepted whole or not at all: wrong field counts and
//! unparsable numerics drop the line silently, surfacing only as an
//! aggregate count in [`ParseStats`].

pub mod parser;
pub mod stats;

#[cfg(test)]
mod tests;

pub use parser::{parse_line, parse_lines};
pub use stats::{ParseResult, ParseStats};

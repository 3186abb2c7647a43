//! Flat-file input and output for the sales pipeline
//!
//! Reading is forgiving: a missing file or undecodable content surfaces as
//! a warning and an empty line set so the pipeline can report cleanly on
//! nothing. Writing is strict: a failed write aborts the stage rather than
//! silently losing data.

use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::models::EnrichedTransaction;
use crate::constants::{is_header_line, ENRICHED_FILE_HEADER};
use crate::{Error, Result};

/// Read and clean raw transaction lines from the sales data file
///
/// The file bytes are decoded trying UTF-8 strictly, then WINDOWS-1252 as
/// a permissive single-byte fallback. Blank lines and the header line are
/// skipped and remaining lines are whitespace-trimmed. A missing file or
/// a read failure yields an empty collection after a diagnostic, never an
/// error.
pub fn read_sales_lines(path: &Path) -> Vec<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Input file not found: {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let Some(content) = decode_with_fallback(&bytes) else {
        warn!(
            "Unable to decode {} with supported encodings",
            path.display()
        );
        return Vec::new();
    };

    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_header_line(line))
        .map(str::to_string)
        .collect();

    info!("Read {} data lines from {}", lines.len(), path.display());
    lines
}

/// Decode file bytes trying encoding candidates in order
///
/// UTF-8 is attempted strictly first; WINDOWS-1252 accepts any byte
/// sequence, so content that is neither still decodes rather than losing
/// the whole file.
fn decode_with_fallback(bytes: &[u8]) -> Option<String> {
    if let Ok(content) = std::str::from_utf8(bytes) {
        return Some(content.to_string());
    }

    debug!("Input is not valid UTF-8, falling back to WINDOWS-1252");
    let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
    if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Write enriched transactions as a pipe-delimited file
///
/// Writes the fixed 12-column header followed by one row per record.
/// Absent enrichment fields render as empty strings. Parent directories
/// are created as needed; any write failure propagates.
pub fn write_enriched_file(path: &Path, records: &[EnrichedTransaction]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create directory {}", parent.display()),
                e,
            )
        })?;
    }

    let mut content = String::with_capacity(records.len() * 80);
    content.push_str(ENRICHED_FILE_HEADER);
    content.push('\n');
    for record in records {
        content.push_str(&record.to_delimited_row());
        content.push('\n');
    }

    fs::write(path, content)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!(
        "Wrote {} enriched records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Transaction;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_enriched() -> EnrichedTransaction {
        EnrichedTransaction::unmatched(Transaction {
            transaction_id: "T1".to_string(),
            date: "2024-01-01".to_string(),
            product_id: "P101".to_string(),
            product_name: "Widget".to_string(),
            quantity: 5,
            unit_price: dec!(10.00),
            customer_id: "C1".to_string(),
            region: "North".to_string(),
        })
    }

    #[test]
    fn test_read_skips_header_and_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sales.txt");
        fs::write(
            &path,
            "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region\n\
             T1|2024-01-01|P101|Widget|5|10.00|C1|North\n\
             \n\
             T2|2024-01-02|P102|Gadget|3|7.50|C2|South\n",
        )
        .unwrap();

        let lines = read_sales_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("T1"));
        assert!(lines[1].starts_with("T2"));
    }

    #[test]
    fn test_read_missing_file_yields_empty() {
        let temp_dir = TempDir::new().unwrap();
        let lines = read_sales_lines(&temp_dir.path().join("missing.txt"));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_decodes_windows_1252_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin.txt");
        // 0xE9 is 'é' in WINDOWS-1252 and invalid as a UTF-8 start byte here
        fs::write(
            &path,
            b"T1|2024-01-01|P101|Caf\xe9 Mug|5|10.00|C1|North\n",
        )
        .unwrap();

        let lines = read_sales_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Café Mug"));
    }

    #[test]
    fn test_write_enriched_file_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("enriched.txt");

        write_enriched_file(&path, &[sample_enriched()]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("TransactionID|Date|ProductID"));
        assert!(lines[0].ends_with("API_Category|API_Brand|API_Rating|API_Match"));
        assert_eq!(lines[1], "T1|2024-01-01|P101|Widget|5|10.00|C1|North||||false");
    }

    #[test]
    fn test_write_enriched_file_empty_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("enriched.txt");

        write_enriched_file(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}

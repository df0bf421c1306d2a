//! Output formatting for ORF scan results.
//!
//! This module provides writers for converting [`OrfResults`] into the two
//! FASTA outputs the scanner produces.
//!
//! ## Supported Formats
//!
//! - **Nucleotide (FNA)**: ORF sequence as DNA
//! - **Protein (FAA)**: translated ORF sequence
//!
//! Both writers emit one record per result with the header
//! `>{id}_frame{frame}_{begin}_{end}`. Records without an ORF are still
//! written, with a zero frame and coordinates and an empty body line, so
//! output records stay aligned with input records.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use orfscan_core::{config::{OutputFormat, ScanConfig}, OrfScanner};
//! use orfscan_core::output::write_results;
//! use std::fs::File;
//!
//! let scanner = OrfScanner::new(ScanConfig::default());
//! let results = scanner.scan_fasta_file("genome.fa")?;
//!
//! let mut fna_file = File::create("ORF.fna")?;
//! let mut faa_file = File::create("ORF.faa")?;
//! for result in &results {
//!     write_results(&mut fna_file, result, OutputFormat::Nucleotide)?;
//!     write_results(&mut faa_file, result, OutputFormat::Protein)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{config::OutputFormat, results::OrfResults, types::OrfError};
use std::io::Write;

mod formats {
    pub mod faa;
    pub mod fna;
}

use formats::{faa::write_faa_format, fna::write_fna_format};

/// Writes one scan result in the specified format.
///
/// This is the main entry point for output formatting. It delegates to
/// format-specific writers based on the requested output format.
///
/// # Arguments
///
/// * `writer` - Output writer (file, stdout, buffer, etc.)
/// * `results` - Scan result to write
/// * `format` - Desired output format
///
/// # Errors
///
/// Returns [`OrfError`] if writing fails.
///
/// # Examples
///
/// ```rust,no_run
/// use orfscan_core::{config::{OutputFormat, ScanConfig}, OrfScanner};
/// use orfscan_core::output::write_results;
/// use std::fs::File;
///
/// let scanner = OrfScanner::new(ScanConfig::default());
/// let results = scanner.scan_fasta_file("genome.fa")?;
///
/// let mut output = File::create("ORF.faa")?;
/// for result in &results {
///     write_results(&mut output, result, OutputFormat::Protein)?;
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &OrfResults,
    format: OutputFormat,
) -> Result<(), OrfError> {
    match format {
        OutputFormat::Nucleotide => write_fna_format(writer, results),
        OutputFormat::Protein => write_faa_format(writer, results),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::OutputFormat,
        results::{OrfResults, SequenceInfo},
        types::{Orf, OrfCoordinates},
    };
    use std::io::Cursor;

    fn create_test_results() -> OrfResults {
        OrfResults {
            orf: Orf {
                sequence: b"ATGAAATAG".to_vec(),
                coordinates: OrfCoordinates {
                    frame: 1,
                    begin: 1,
                    end: 9,
                },
            },
            protein: "MK*".to_string(),
            sequence_info: SequenceInfo {
                header: "test_seq".to_string(),
                length: 9,
                description: Some("Test sequence".to_string()),
            },
        }
    }

    #[test]
    fn test_write_results_nucleotide_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        let result = write_results(&mut cursor, &results, OutputFormat::Nucleotide);
        assert!(result.is_ok());

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">test_seq_frame1_1_9\nATGAAATAG\n");
    }

    #[test]
    fn test_write_results_protein_format() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        let results = create_test_results();

        let result = write_results(&mut cursor, &results, OutputFormat::Protein);
        assert!(result.is_ok());

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, ">test_seq_frame1_1_9\nMK*\n");
    }

    #[test]
    fn test_write_results_without_orf() {
        let results = OrfResults {
            orf: Orf::default(),
            protein: String::new(),
            sequence_info: SequenceInfo {
                header: "empty_seq".to_string(),
                length: 10,
                description: None,
            },
        };

        // A record without an ORF still produces a header and a blank body
        for format in [OutputFormat::Nucleotide, OutputFormat::Protein] {
            let mut buffer = Vec::new();
            let mut cursor = Cursor::new(&mut buffer);

            let result = write_results(&mut cursor, &results, format);
            assert!(result.is_ok(), "Failed to write format: {:?}", format);

            let output = String::from_utf8(buffer).unwrap();
            assert_eq!(output, ">empty_seq_frame0_0_0\n\n");
        }
    }
}

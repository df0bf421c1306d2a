use std::path::Path;

use crate::config::ScanConfig;
use crate::results::{OrfResults, SequenceInfo};
use crate::scanner::find_longest_orf;
use crate::sequence::{FastaRecord, read_fasta_sequences};
use crate::translate::translate;
use crate::types::OrfError;

/// Main ORF scanning engine.
///
/// Drives the complete workflow: reading FASTA records, finding the
/// longest ORF per record across all six reading frames, and translating
/// it into an amino acid sequence.
///
/// # Examples
///
/// ## Scan a sequence in memory
///
/// ```rust
/// use orfscan_core::{config::ScanConfig, OrfScanner};
///
/// let scanner = OrfScanner::new(ScanConfig::default());
/// let result = scanner.scan_sequence(b"ATGAAATAG", "demo".to_string(), None);
///
/// assert_eq!(result.protein, "MK*");
/// assert_eq!(result.record_id(), "demo_frame1_1_9");
/// ```
///
/// ## Scan a FASTA file
///
/// ```rust,no_run
/// use orfscan_core::{config::ScanConfig, OrfScanner};
///
/// let scanner = OrfScanner::new(ScanConfig::default());
/// let results = scanner.scan_fasta_file("genome.fa")?;
///
/// for result in results {
///     println!("Sequence: {}", result.sequence_info.header);
///     println!("  ORF: {} bp in frame {}",
///              result.orf.len(),
///              result.orf.coordinates.frame);
/// }
/// # Ok::<(), orfscan_core::types::OrfError>(())
/// ```
#[derive(Debug, Default)]
pub struct OrfScanner {
    /// Configuration options for the scan
    pub config: ScanConfig,
}

impl OrfScanner {
    /// Creates a new scanner with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration options for the scan
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orfscan_core::{config::ScanConfig, OrfScanner};
    ///
    /// let scanner = OrfScanner::new(ScanConfig::default());
    /// ```
    #[must_use]
    pub const fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scans every record in a FASTA file.
    ///
    /// Reads all records from the file and finds the longest ORF in each.
    /// Results come back in file order, one entry per record, including
    /// records in which no ORF was found.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the FASTA file
    ///
    /// # Returns
    ///
    /// A vector of [`OrfResults`], one for each record in the file.
    ///
    /// # Errors
    ///
    /// Returns [`OrfError`] if:
    /// - The file cannot be read
    /// - The FASTA format is invalid
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use orfscan_core::{config::ScanConfig, OrfScanner};
    ///
    /// let scanner = OrfScanner::new(ScanConfig::default());
    /// let results = scanner.scan_fasta_file("genome.fa")?;
    ///
    /// for (i, result) in results.iter().enumerate() {
    ///     println!("Record {}: {} bp ORF", i + 1, result.orf.len());
    /// }
    /// # Ok::<(), orfscan_core::types::OrfError>(())
    /// ```
    pub fn scan_fasta_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<OrfResults>, OrfError> {
        let records = read_fasta_sequences(path)?;
        Ok(self.scan_records(records))
    }

    /// Scans FASTA records already loaded into memory.
    ///
    /// # Arguments
    ///
    /// * `records` - Parsed FASTA records as (id, description, sequence)
    ///
    /// # Returns
    ///
    /// A vector of [`OrfResults`] in the same order as the input records.
    #[must_use]
    pub fn scan_records(&self, records: Vec<FastaRecord>) -> Vec<OrfResults> {
        records
            .into_iter()
            .map(|(header, description, sequence)| {
                self.scan_sequence(&sequence, header, description)
            })
            .collect()
    }

    /// Scans a single sequence for its longest ORF.
    ///
    /// This is the core scan method used by the file and record entry
    /// points. The sequence is expected in upper case, as produced by
    /// [`read_fasta_sequences`].
    ///
    /// # Arguments
    ///
    /// * `sequence` - Raw nucleotide sequence bytes
    /// * `header` - Sequence identifier for output
    /// * `description` - Optional sequence description
    ///
    /// # Returns
    ///
    /// [`OrfResults`] holding the longest ORF, its translation, and the
    /// record metadata. A sequence without a complete ORF yields the zero
    /// ORF and an empty protein.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orfscan_core::{config::ScanConfig, OrfScanner};
    ///
    /// let scanner = OrfScanner::new(ScanConfig::default());
    /// let result = scanner.scan_sequence(b"CCCCCCCCCC", "empty".to_string(), None);
    ///
    /// assert!(result.orf.is_empty());
    /// assert_eq!(result.record_id(), "empty_frame0_0_0");
    /// ```
    #[must_use]
    pub fn scan_sequence(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> OrfResults {
        let orf = find_longest_orf(sequence);
        let protein = translate(&orf.sequence);

        OrfResults {
            orf,
            protein,
            sequence_info: SequenceInfo {
                length: sequence.len(),
                header,
                description,
            },
        }
    }
}

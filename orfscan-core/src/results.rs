use crate::types::Orf;

/// Scan results for a single FASTA record.
///
/// Pairs the longest ORF found across all six reading frames with its
/// translation and the metadata of the record it came from.
///
/// # Fields
///
/// - `orf`: Longest ORF found, or the zero value if none was found
/// - `protein`: Amino acid translation of the ORF sequence
/// - `sequence_info`: Metadata about the scanned record
///
/// # Examples
///
/// ```rust,no_run
/// use orfscan_core::{config::ScanConfig, OrfScanner};
///
/// let scanner = OrfScanner::new(ScanConfig::default());
/// let results = scanner.scan_fasta_file("genome.fa")?;
///
/// for result in &results {
///     println!("{}: {} bp ORF", result.record_id(), result.orf.len());
/// }
/// # Ok::<(), orfscan_core::types::OrfError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OrfResults {
    /// Longest open reading frame found in the record.
    ///
    /// Holds the zero value when the record contains no complete ORF.
    pub orf: Orf,

    /// Amino acid translation of the ORF sequence.
    ///
    /// Ends with `*` for the stop codon. Empty when no ORF was found.
    pub protein: String,

    /// Information about the scanned record.
    pub sequence_info: SequenceInfo,
}

impl OrfResults {
    /// Identifier used for this result in FASTA output.
    ///
    /// Combines the record header with the ORF frame and coordinates.
    /// A record without an ORF keeps the zero frame and coordinates, so
    /// its identifier ends in `_frame0_0_0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orfscan_core::results::{OrfResults, SequenceInfo};
    /// use orfscan_core::types::{Orf, OrfCoordinates};
    ///
    /// let results = OrfResults {
    ///     orf: Orf {
    ///         sequence: b"ATGAAATAG".to_vec(),
    ///         coordinates: OrfCoordinates { frame: 1, begin: 1, end: 9 },
    ///     },
    ///     protein: "MK*".to_string(),
    ///     sequence_info: SequenceInfo {
    ///         length: 9,
    ///         header: "seq1".to_string(),
    ///         description: None,
    ///     },
    /// };
    ///
    /// assert_eq!(results.record_id(), "seq1_frame1_1_9");
    /// ```
    #[must_use]
    pub fn record_id(&self) -> String {
        format!(
            "{}_frame{}_{}_{}",
            self.sequence_info.header,
            self.orf.coordinates.frame,
            self.orf.coordinates.begin,
            self.orf.coordinates.end
        )
    }
}

/// Information about a scanned sequence record.
#[derive(Debug, Clone)]
pub struct SequenceInfo {
    /// Length of the input sequence in base pairs.
    pub length: usize,

    /// Sequence identifier from FASTA header.
    ///
    /// The first word of the FASTA header line (after '>').
    pub header: String,

    /// Full sequence description from FASTA header.
    ///
    /// Everything after the first word in the FASTA header line.
    pub description: Option<String>,
}

/// Output format options for scan results.
///
/// Each sequence record produces one FASTA record per format: the
/// nucleotides of its best reading, and the protein translated from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nucleotide FASTA of the best reading per input sequence.
    ///
    /// Records carry the synthesized `{id}_frame{frame}_{begin}_{end}`
    /// header and the reading's bases on a single line.
    Nucleotide,

    /// Protein FASTA of the best reading per input sequence.
    ///
    /// Same headers as the nucleotide output, with the translated
    /// amino-acid sequence as the body.
    Protein,
}

/// Configuration settings for an ORF scan.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::config::ScanConfig;
///
/// let config = ScanConfig { quiet: true };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Suppress informational output after processing.
    ///
    /// When `true`, prevents the post-run summary from being printed
    /// to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

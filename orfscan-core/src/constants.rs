// =============================================================================
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of phase offsets scanned per strand
pub const READING_FRAMES: usize = 3;

/// Start codon that opens a reading
pub const START_CODON: &[u8] = b"ATG";

/// Stop codons that close a reading
pub const STOP_CODONS: [&[u8]; 3] = [b"TAA", b"TAG", b"TGA"];

// =============================================================================
// =============================================================================

/// Symbol emitted for codons absent from the genetic code table
pub const UNKNOWN_AMINO_ACID: char = 'X';

// =============================================================================
// =============================================================================

/// Default path for the nucleotide FASTA output
pub const DEFAULT_NUCLEOTIDE_OUTPUT: &str = "ORF.fna";

/// Default path for the protein FASTA output
pub const DEFAULT_PROTEIN_OUTPUT: &str = "ORF.faa";

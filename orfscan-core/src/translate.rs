//! Codon translation using the standard genetic code.
//!
//! Translation walks a nucleotide sequence three bases at a time and maps
//! each codon through [`GENETIC_CODE`]. Stop codons translate to `*` and
//! any codon containing a base outside ACGT translates to `X`.

use crate::constants::{CODON_LENGTH, UNKNOWN_AMINO_ACID};
use phf::phf_map;

/// The standard genetic code (NCBI translation table 1).
///
/// Keyed by upper-case codon bytes. Codons absent from the table, such as
/// those containing N, fall back to [`UNKNOWN_AMINO_ACID`] in
/// [`translate`].
pub static GENETIC_CODE: phf::Map<&'static [u8], char> = phf_map! {
    b"TTT" => 'F', b"TTC" => 'F', b"TTA" => 'L', b"TTG" => 'L',
    b"CTT" => 'L', b"CTC" => 'L', b"CTA" => 'L', b"CTG" => 'L',
    b"ATT" => 'I', b"ATC" => 'I', b"ATA" => 'I', b"ATG" => 'M',
    b"GTT" => 'V', b"GTC" => 'V', b"GTA" => 'V', b"GTG" => 'V',
    b"TCT" => 'S', b"TCC" => 'S', b"TCA" => 'S', b"TCG" => 'S',
    b"CCT" => 'P', b"CCC" => 'P', b"CCA" => 'P', b"CCG" => 'P',
    b"ACT" => 'T', b"ACC" => 'T', b"ACA" => 'T', b"ACG" => 'T',
    b"GCT" => 'A', b"GCC" => 'A', b"GCA" => 'A', b"GCG" => 'A',
    b"TAT" => 'Y', b"TAC" => 'Y', b"TAA" => '*', b"TAG" => '*',
    b"CAT" => 'H', b"CAC" => 'H', b"CAA" => 'Q', b"CAG" => 'Q',
    b"AAT" => 'N', b"AAC" => 'N', b"AAA" => 'K', b"AAG" => 'K',
    b"GAT" => 'D', b"GAC" => 'D', b"GAA" => 'E', b"GAG" => 'E',
    b"TGT" => 'C', b"TGC" => 'C', b"TGA" => '*', b"TGG" => 'W',
    b"CGT" => 'R', b"CGC" => 'R', b"CGA" => 'R', b"CGG" => 'R',
    b"AGT" => 'S', b"AGC" => 'S', b"AGA" => 'R', b"AGG" => 'R',
    b"GGT" => 'G', b"GGC" => 'G', b"GGA" => 'G', b"GGG" => 'G',
};

/// Translates a nucleotide sequence into an amino acid string.
///
/// Codons are read from the first base of the sequence. A trailing
/// partial codon of one or two bases is ignored. Stop codons appear as
/// `*` in the output and unrecognized codons as `X`.
///
/// # Arguments
///
/// * `sequence` - Upper-case nucleotide sequence to translate
///
/// # Returns
///
/// The amino acid sequence, one character per complete codon.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::translate::translate;
///
/// assert_eq!(translate(b"ATGAAATAG"), "MK*");
/// ```
#[must_use]
pub fn translate(sequence: &[u8]) -> String {
    sequence
        .chunks_exact(CODON_LENGTH)
        .map(|codon| {
            GENETIC_CODE
                .get(codon)
                .copied()
                .unwrap_or(UNKNOWN_AMINO_ACID)
        })
        .collect()
}

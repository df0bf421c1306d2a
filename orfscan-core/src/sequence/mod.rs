//! Nucleotide sequence utilities.
//!
//! Sequences are plain ASCII byte slices, upper-cased at load time. This
//! module provides the strand and codon primitives the scanner is built on.
//!
//! ## Overview
//!
//! - [`complement`] / [`reverse_complement`]: opposite-strand construction.
//!   Complementation swaps A with T and C with G; any other byte (N and
//!   other ambiguity characters) passes through unchanged.
//! - [`is_start_codon`] / [`is_stop_codon`]: codon classification against
//!   the fixed start codon (ATG) and stop codons (TAA, TAG, TGA).
//! - [`io`]: FASTA file reading and parsing.
//!
//! ## Examples
//!
//! ```rust
//! use orfscan_core::sequence::{is_start_codon, reverse_complement};
//!
//! let forward = reverse_complement(b"CTATTTCAT");
//! assert_eq!(forward, b"ATGAAATAG");
//! assert!(is_start_codon(&forward[0..3]));
//! ```

use crate::constants::{START_CODON, STOP_CODONS};

pub mod io;

pub use io::*;

/// Complement of a single nucleotide.
///
/// Swaps A with T and C with G. Bytes outside the four bases are returned
/// unchanged, so ambiguity characters survive a round trip through
/// [`reverse_complement`].
#[must_use]
pub const fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a nucleotide sequence.
///
/// Reverses the sequence and complements each base, yielding the opposite
/// strand read 5' to 3'. Applying it twice returns the original sequence.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
/// ```
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&base| complement(base)).collect()
}

/// Test if a codon is the ATG start codon
#[must_use]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

/// Test if a codon is one of the stop codons (TAA, TAG, TGA)
#[must_use]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|&stop| codon == stop)
}

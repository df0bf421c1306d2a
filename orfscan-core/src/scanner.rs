//! Six-frame open reading frame detection.
//!
//! The scanner reads each strand in all three codon phases and keeps the
//! single longest ORF seen anywhere. Frames 1 through 3 are the forward
//! strand at offsets 0 through 2 and frames 4 through 6 are the reverse
//! complement at the same offsets.

use crate::constants::{CODON_LENGTH, READING_FRAMES};
use crate::sequence::{is_start_codon, is_stop_codon, reverse_complement};
use crate::types::{Orf, OrfCoordinates};

/// Finds the longest open reading frame across all six reading frames.
///
/// An ORF opens at the first ATG encountered while no ORF is open and
/// closes at the next in-frame stop codon. Start codons inside an open
/// ORF are ignored, so ORFs in one frame never nest. A candidate
/// replaces the running best only when strictly longer, which makes the
/// result deterministic: ties go to the earlier frame, and within a
/// frame to the earlier ORF.
///
/// Coordinates are 1-based and inclusive on the strand the ORF was found
/// on. A sequence without any complete ORF yields [`Orf::default`], whose
/// frame and coordinates are all zero.
///
/// # Arguments
///
/// * `sequence` - Upper-case nucleotide sequence to scan
///
/// # Examples
///
/// ```rust
/// use orfscan_core::scanner::find_longest_orf;
///
/// let orf = find_longest_orf(b"ATGAAATAG");
/// assert_eq!(orf.sequence, b"ATGAAATAG");
/// assert_eq!(orf.coordinates.frame, 1);
/// assert_eq!(orf.coordinates.begin, 1);
/// assert_eq!(orf.coordinates.end, 9);
/// ```
#[must_use]
pub fn find_longest_orf(sequence: &[u8]) -> Orf {
    if sequence.is_empty() {
        return Orf::default();
    }

    let mut best = Orf::default();
    let reverse = reverse_complement(sequence);

    for (strand_index, strand) in [sequence, reverse.as_slice()].into_iter().enumerate() {
        for offset in 0..READING_FRAMES {
            let frame = strand_index * READING_FRAMES + offset + 1;
            if let Some(candidate) = scan_frame(strand, offset, frame) {
                if candidate.sequence.len() > best.sequence.len() {
                    best = candidate;
                }
            }
        }
    }

    best
}

/// Scans one strand at one codon offset and returns its longest ORF.
fn scan_frame(strand: &[u8], offset: usize, frame: usize) -> Option<Orf> {
    let codons = strand.get(offset..)?;
    let mut best: Option<Orf> = None;
    let mut open_start: Option<usize> = None;

    for (index, codon) in codons.chunks_exact(CODON_LENGTH).enumerate() {
        match open_start {
            None => {
                if is_start_codon(codon) {
                    open_start = Some(index);
                }
            }
            Some(start) => {
                if is_stop_codon(codon) {
                    let begin = offset + start * CODON_LENGTH;
                    let end = offset + (index + 1) * CODON_LENGTH;
                    let length = end - begin;
                    if best.as_ref().is_none_or(|b| length > b.sequence.len()) {
                        best = Some(Orf {
                            sequence: strand[begin..end].to_vec(),
                            coordinates: OrfCoordinates {
                                frame,
                                begin: begin + 1,
                                end,
                            },
                        });
                    }
                    open_start = None;
                }
            }
        }
    }

    best
}

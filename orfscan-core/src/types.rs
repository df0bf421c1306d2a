use bio::bio_types::strand::Strand;
use thiserror::Error;

/// Location metadata for an open reading frame.
///
/// Frames are numbered 1 through 6: frames 1-3 lie on the forward strand at
/// phase offsets 0-2, frames 4-6 on the reverse complement at offsets 0-2.
/// `begin` and `end` are 1-based inclusive positions measured on the strand
/// where the reading was found. The zero value (frame 0, positions 0)
/// marks a sequence without any complete reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrfCoordinates {
    /// Reading frame index (1-6), 0 when no reading exists
    pub frame: usize,
    /// Start position of the reading (1-based)
    pub begin: usize,
    /// End position of the reading (1-based, inclusive)
    pub end: usize,
}

impl OrfCoordinates {
    /// Strand holding the reading.
    ///
    /// Frames 1-3 map to [`Strand::Forward`], frames 4-6 to
    /// [`Strand::Reverse`]. Frame 0 (no reading) maps to
    /// [`Strand::Unknown`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bio::bio_types::strand::Strand;
    /// use orfscan_core::types::OrfCoordinates;
    ///
    /// let coordinates = OrfCoordinates { frame: 5, begin: 2, end: 10 };
    /// assert!(matches!(coordinates.strand(), Strand::Reverse));
    /// ```
    #[must_use]
    pub const fn strand(&self) -> Strand {
        match self.frame {
            1..=3 => Strand::Forward,
            4..=6 => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }

    /// Phase offset (0-2) of the frame on its strand
    #[must_use]
    pub const fn phase(&self) -> usize {
        match self.frame {
            1..=6 => (self.frame - 1) % 3,
            _ => 0,
        }
    }
}

/// A single open reading frame.
///
/// Holds the nucleotide bytes from the start codon through the stop codon,
/// plus the frame and position where they were found. The `Default` value
/// is the empty reading used for sequences with no ORF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orf {
    /// Nucleotide sequence from start codon through stop codon
    pub sequence: Vec<u8>,
    /// Frame and position of the reading on its strand
    pub coordinates: OrfCoordinates,
}

impl Orf {
    /// Length of the reading in base pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether this is the empty no-reading value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Error types that can occur during an ORF scan
#[derive(Error, Debug)]
pub enum OrfError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}

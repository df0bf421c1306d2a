//! # ORF Scanner - Core Library
//!
//! Six-frame open reading frame detection and translation for nucleotide
//! sequences. This library reads FASTA files, finds the single longest ORF
//! in each record, and translates it with the standard genetic code.
//!
//! ## Overview
//!
//! For every record the scanner examines six reading frames: the three
//! codon phases of the forward strand (frames 1 to 3) and the three codon
//! phases of the reverse complement (frames 4 to 6). An ORF runs from an
//! ATG start codon to the next in-frame stop codon, and only the longest
//! ORF per record is reported.
//!
//! ## Features
//!
//! - **Six-Frame Scanning**: Both strands in all three codon phases
//! - **Standard Translation**: NCBI translation table 1, with `X` for
//!   codons containing unknown bases
//! - **FASTA In, FASTA Out**: Reads multi-record FASTA and writes paired
//!   nucleotide and protein FASTA files
//! - **Deterministic Results**: Ties resolve to the earliest frame
//!
//! ## Quick Start
//!
//! ```rust
//! use orfscan_core::{config::ScanConfig, OrfScanner};
//!
//! let scanner = OrfScanner::new(ScanConfig::default());
//! let result = scanner.scan_sequence(b"ATGAAATAG", "demo".to_string(), None);
//!
//! assert_eq!(result.protein, "MK*");
//! assert_eq!(result.record_id(), "demo_frame1_1_9");
//! ```
//!
//! ## Scanning Files
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
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for a scan
//! - [`engine`]: Main scanning engine
//! - [`types`]: Core data types and structures
//! - [`results`]: Per-record scan results
//! - [`scanner`]: Six-frame longest-ORF search
//! - [`sequence`]: Strand operations and FASTA reading
//! - [`translate`]: Codon translation
//! - [`output`]: FASTA output writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, OrfError>`](types::OrfError),
//! covering:
//!
//! - I/O errors during file operations
//! - Invalid FASTA input

pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod scanner;
pub mod sequence;
pub mod translate;
pub mod types;

pub use engine::OrfScanner;

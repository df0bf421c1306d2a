//! # ORF Scanner CLI
//!
//! A command-line six-frame open reading frame scanner.
//!
//! Reads a FASTA file, finds the longest ORF in each record across both
//! strands and all three codon phases, and writes two FASTA files: the
//! ORF nucleotide sequences and their translations.
//!
//! ## Usage
//!
//! ```bash
//! # Scan a genome, writing ORF.fna and ORF.faa
//! orfscan genome.fa
//!
//! # Custom output paths
//! orfscan genome.fa -n orfs.fna -a orfs.faa
//!
//! # Suppress the summary line
//! orfscan genome.fa -q
//! ```
//!
//! ## Options
//!
//! - `<FASTA>`: Input FASTA file (required)
//! - `-n, --nucleotide-out <FILE>`: Nucleotide output file (default: ORF.fna)
//! - `-a, --protein-out <FILE>`: Protein output file (default: ORF.faa)
//! - `-q, --quiet`: Suppress progress messages
//!
//! ## Examples
//!
//! ### Scan an assembly
//!
//! ```bash
//! orfscan contigs.fa -n contigs_orfs.fna -a contigs_orfs.faa
//! ```

use clap::{Arg, ArgAction, Command};
use orfscan_core::config::{OutputFormat, ScanConfig};
use orfscan_core::constants::{DEFAULT_NUCLEOTIDE_OUTPUT, DEFAULT_PROTEIN_OUTPUT};
use orfscan_core::output::write_results;
use orfscan_core::*;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Main entry point for the ORF scanner CLI.
///
/// Parses command-line arguments, scans the input sequences, and writes
/// the nucleotide and protein FASTA outputs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("orfscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Six-frame longest ORF finder and translator")
        .arg(
            Arg::new("input")
                .value_name("FASTA")
                .help("Input FASTA file")
                .required(true),
        )
        .arg(
            Arg::new("nucleotide-out")
                .short('n')
                .long("nucleotide-out")
                .value_name("FILE")
                .help("Nucleotide output file")
                .default_value(DEFAULT_NUCLEOTIDE_OUTPUT),
        )
        .arg(
            Arg::new("protein-out")
                .short('a')
                .long("protein-out")
                .value_name("FILE")
                .help("Protein output file")
                .default_value(DEFAULT_PROTEIN_OUTPUT),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = ScanConfig {
        quiet: matches.get_flag("quiet"),
    };

    let scanner = OrfScanner::new(config);
    let input = matches.get_one::<String>("input").unwrap();
    let results = scanner
        .scan_fasta_file(input)
        .map_err(|e| format!("failed to read {input}: {e}"))?;

    let nucleotide_path = matches.get_one::<String>("nucleotide-out").unwrap();
    let protein_path = matches.get_one::<String>("protein-out").unwrap();
    let mut nucleotide_writer = BufWriter::new(File::create(nucleotide_path)?);
    let mut protein_writer = BufWriter::new(File::create(protein_path)?);

    for result in &results {
        write_results(&mut nucleotide_writer, result, OutputFormat::Nucleotide)?;
        write_results(&mut protein_writer, result, OutputFormat::Protein)?;
    }

    nucleotide_writer.flush()?;
    protein_writer.flush()?;

    if !scanner.config.quiet {
        eprintln!(
            "Scan complete! Found {} ORFs in {} sequences.",
            results.iter().filter(|r| !r.orf.is_empty()).count(),
            results.len()
        );
    }

    Ok(())
}

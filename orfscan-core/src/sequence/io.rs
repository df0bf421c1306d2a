use crate::types::*;
use bio::io::fasta;
use std::fs::File;
use std::path::Path;

/// Read sequences using rust-bio for FASTA files
/// Type alias to simplify the complex return type
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Reads every record from a FASTA file, in file order.
///
/// The record id is the first whitespace-delimited token of the header
/// line and the remainder, if any, is kept as the description. All
/// sequence lines of a record are concatenated and upper-cased, so mixed
/// and lower case input scans the same as upper case.
///
/// Identifiers are unique in the result: a repeated identifier replaces
/// the earlier record's description and sequence while keeping its
/// first-occurrence position.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, OrfError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences: Vec<FastaRecord> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| OrfError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_ascii_uppercase();
        match sequences.iter().position(|(existing, _, _)| *existing == id) {
            Some(index) => sequences[index] = (id, description, seq),
            None => sequences.push((id, description, seq)),
        }
    }

    Ok(sequences)
}

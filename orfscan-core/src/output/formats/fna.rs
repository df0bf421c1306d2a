use std::io::Write;

use crate::{results::OrfResults, types::OrfError};

/// Write the ORF nucleotide sequence in FASTA format
pub fn write_fna_format<W: Write>(writer: &mut W, results: &OrfResults) -> Result<(), OrfError> {
    writeln!(writer, ">{}", results.record_id())?;
    writeln!(writer, "{}", String::from_utf8_lossy(&results.orf.sequence))?;
    Ok(())
}

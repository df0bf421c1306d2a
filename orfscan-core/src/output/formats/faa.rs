use std::io::Write;

use crate::{results::OrfResults, types::OrfError};

/// Write the translated ORF in FASTA format
pub fn write_faa_format<W: Write>(writer: &mut W, results: &OrfResults) -> Result<(), OrfError> {
    writeln!(writer, ">{}", results.record_id())?;
    writeln!(writer, "{}", results.protein)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::{
        results::SequenceInfo,
        types::{Orf, OrfCoordinates},
    };

    use super::*;

    #[test]
    fn test_write_faa_format_basic() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = OrfResults {
            orf: Orf {
                sequence: b"ATGAAATAG".to_vec(),
                coordinates: OrfCoordinates {
                    frame: 1,
                    begin: 1,
                    end: 9,
                },
            },
            protein: "MK*".to_string(),
            sequence_info: SequenceInfo {
                header: "seq1".to_string(),
                length: 9,
                description: None,
            },
        };

        write_faa_format(&mut cursor, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, ">seq1_frame1_1_9\nMK*\n");
    }

    #[test]
    fn test_write_faa_format_no_orf() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = OrfResults {
            orf: Orf::default(),
            protein: String::new(),
            sequence_info: SequenceInfo {
                header: "empty".to_string(),
                length: 10,
                description: None,
            },
        };

        write_faa_format(&mut cursor, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, ">empty_frame0_0_0\n\n");
    }
}

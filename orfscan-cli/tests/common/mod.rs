#![allow(dead_code)]

use assert_cmd::Command;

/// Runs the ORF scanner CLI with explicit output paths
pub fn run_orfscan(
    input_file: &str,
    nucleotide_out: &str,
    protein_out: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("orfscan")?;
    cmd.arg(input_file)
        .arg("-n")
        .arg(nucleotide_out)
        .arg("-a")
        .arg(protein_out);

    cmd.assert().success();
    Ok(())
}

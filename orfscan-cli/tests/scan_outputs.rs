mod common;
use crate::common::run_orfscan;
use assert_cmd::Command;
use tempfile::TempDir;

const SAMPLE_FASTA: &str = ">seq1 test record\nATGAAATAG\n>seq2\nCCCCCCCCCC\n";

#[test]
fn scan_writes_nucleotide_and_protein_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.fa");
    let fna = dir.path().join("out.fna");
    let faa = dir.path().join("out.faa");
    std::fs::write(&input, SAMPLE_FASTA).unwrap();

    run_orfscan(
        input.to_str().unwrap(),
        fna.to_str().unwrap(),
        faa.to_str().unwrap(),
    )
    .unwrap();

    let nucleotide = std::fs::read_to_string(&fna).unwrap();
    let protein = std::fs::read_to_string(&faa).unwrap();

    // One record per input sequence, ORF-less records kept with zero coords
    assert_eq!(nucleotide, ">seq1_frame1_1_9\nATGAAATAG\n>seq2_frame0_0_0\n\n");
    assert_eq!(protein, ">seq1_frame1_1_9\nMK*\n>seq2_frame0_0_0\n\n");
}

#[test]
fn scan_reports_reverse_strand_orfs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.fa");
    let fna = dir.path().join("out.fna");
    let faa = dir.path().join("out.faa");
    std::fs::write(&input, ">rev\nCTATTTCAT\n").unwrap();

    run_orfscan(
        input.to_str().unwrap(),
        fna.to_str().unwrap(),
        faa.to_str().unwrap(),
    )
    .unwrap();

    // The ORF is reported as it reads on the reverse strand
    let nucleotide = std::fs::read_to_string(&fna).unwrap();
    let protein = std::fs::read_to_string(&faa).unwrap();
    assert_eq!(nucleotide, ">rev_frame4_1_9\nATGAAATAG\n");
    assert_eq!(protein, ">rev_frame4_1_9\nMK*\n");
}

#[test]
fn scan_accepts_lower_case_sequences() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.fa");
    let fna = dir.path().join("out.fna");
    let faa = dir.path().join("out.faa");
    std::fs::write(&input, ">soft\natgaaatag\n").unwrap();

    run_orfscan(
        input.to_str().unwrap(),
        fna.to_str().unwrap(),
        faa.to_str().unwrap(),
    )
    .unwrap();

    let protein = std::fs::read_to_string(&faa).unwrap();
    assert_eq!(protein, ">soft_frame1_1_9\nMK*\n");
}

#[test]
fn scan_uses_default_output_paths() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.fa"), SAMPLE_FASTA).unwrap();

    let mut cmd = Command::cargo_bin("orfscan").unwrap();
    cmd.current_dir(dir.path()).arg("input.fa");
    cmd.assert().success();

    let nucleotide = std::fs::read_to_string(dir.path().join("ORF.fna")).unwrap();
    let protein = std::fs::read_to_string(dir.path().join("ORF.faa")).unwrap();
    assert!(nucleotide.starts_with(">seq1_frame1_1_9\n"));
    assert!(protein.starts_with(">seq1_frame1_1_9\n"));
}

#[test]
fn scan_prints_summary_unless_quiet() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("input.fa"), SAMPLE_FASTA).unwrap();

    let mut cmd = Command::cargo_bin("orfscan").unwrap();
    cmd.current_dir(dir.path()).arg("input.fa");
    let assert = cmd.assert().success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Scan complete! Found 1 ORFs in 2 sequences."));

    let mut quiet_cmd = Command::cargo_bin("orfscan").unwrap();
    quiet_cmd.current_dir(dir.path()).arg("input.fa").arg("-q");
    let quiet_assert = quiet_cmd.assert().success();
    let quiet_stderr =
        String::from_utf8_lossy(&quiet_assert.get_output().stderr).to_string();
    assert!(quiet_stderr.is_empty());
}

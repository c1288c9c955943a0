use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn prints_the_unique_sequence_count() {
    Command::cargo_bin("fqtally")
        .unwrap()
        .arg("tests/data/test.fastq")
        .assert()
        .success()
        .stdout("Number of unique sequences: 2\n");
}

#[cfg(feature = "compression")]
#[test]
fn gzipped_input_gives_the_same_count() {
    Command::cargo_bin("fqtally")
        .unwrap()
        .arg("tests/data/test.fastq.gz")
        .assert()
        .success()
        .stdout("Number of unique sequences: 2\n");
}

#[test]
fn empty_input_counts_zero() {
    Command::cargo_bin("fqtally")
        .unwrap()
        .arg("tests/data/empty.fastq")
        .assert()
        .success()
        .stdout("Number of unique sequences: 0\n");
}

#[test]
fn missing_file_fails_without_partial_output() {
    Command::cargo_bin("fqtally")
        .unwrap()
        .arg("tests/data/does_not_exist.fastq")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("source not found"));
}

#[cfg(feature = "compression")]
#[test]
fn corrupt_gzip_fails_with_a_decode_diagnostic() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.fastq.gz");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"this is not gzip data").unwrap();
    drop(f);

    Command::cargo_bin("fqtally")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("could not decompress"));
}

#[test]
fn no_argument_prints_usage() {
    Command::cargo_bin("fqtally")
        .unwrap()
        .assert()
        .failure()
        .stderr(contains("usage"));
}

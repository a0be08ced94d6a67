mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use std::process::Command;
use std::time::Instant;

#[test]
fn test_large_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large_batch.csv");
    common::generate_csv(&path, 10_000).expect("Failed to generate CSV");

    let start = Instant::now();
    let output = Command::new(cargo_bin!("ticket-service"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let duration = start.elapsed();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus one outcome per order
    assert_eq!(stdout.lines().count(), 10_001);
    assert_eq!(stdout.matches(",confirmed,40,2,").count(), 10_000);
    println!("Processed 10000 orders in {:?}", duration);
}

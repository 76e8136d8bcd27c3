use std::process::Command;

use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_island_generator");

#[test]
fn test_writes_island_png() {
    let dir = tempdir().unwrap();
    let status = Command::new(BIN)
        .args(["48", "32"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(dir.path().join("island.png")).unwrap();
    assert_eq!(img.color(), image::ColorType::L8);
    assert_eq!((img.width(), img.height()), (48, 32));
}

#[test]
fn test_missing_height_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = Command::new(BIN)
        .arg("48")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!dir.path().join("island.png").exists());
}

#[test]
fn test_non_integer_fails_without_output() {
    let dir = tempdir().unwrap();
    let status = Command::new(BIN)
        .args(["48", "tall"])
        .current_dir(dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!dir.path().join("island.png").exists());
}

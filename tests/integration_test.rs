//! 整合測試 - 直接執行編譯後的程式

mod common;

use common::jpeg_with_capture_time;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn photo_organize() -> Command {
    Command::new(env!("CARGO_BIN_EXE_photo_organize"))
}

#[test]
fn test_binary_organizes_photos_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    fs::create_dir_all(&input).unwrap();
    fs::write(
        input.join("IMG_001.JPG"),
        jpeg_with_capture_time("2021:05:14 10:22:00"),
    )
    .unwrap();
    fs::write(input.join("notes.txt"), b"text").unwrap();

    let status = photo_organize()
        .current_dir(temp_dir.path())
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let month_dir = output.join("2021").join("05");
    let entries: Vec<_> = fs::read_dir(&month_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_binary_reads_directories_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    fs::create_dir_all(&input).unwrap();
    fs::write(
        input.join("IMG_001.jpg"),
        jpeg_with_capture_time("2018:12:31 23:59:59"),
    )
    .unwrap();

    let status = photo_organize()
        .current_dir(temp_dir.path())
        .env("PHOTO_ORGANIZE_INPUT", &input)
        .env("PHOTO_ORGANIZE_OUTPUT", &output)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(output.join("2018").join("12").is_dir());
}

#[test]
fn test_binary_ignores_settings_file_and_keeps_source() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    let output = temp_dir.path().join("output");
    fs::create_dir_all(&input).unwrap();
    let source = input.join("IMG_001.JPG");
    fs::write(&source, jpeg_with_capture_time("2021:05:14 10:22:00")).unwrap();
    fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"delete_source": true}"#,
    )
    .unwrap();

    let status = photo_organize()
        .current_dir(temp_dir.path())
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(source.exists());
    assert!(output.join("2021").join("05").is_dir());
}

#[test]
fn test_binary_fails_on_missing_input_directory() {
    let temp_dir = TempDir::new().unwrap();

    let status = photo_organize()
        .current_dir(temp_dir.path())
        .arg(temp_dir.path().join("missing"))
        .arg(temp_dir.path().join("output"))
        .status()
        .unwrap();

    assert!(!status.success());
}

#[test]
fn test_binary_requires_both_directories() {
    let temp_dir = TempDir::new().unwrap();

    let status = photo_organize()
        .current_dir(temp_dir.path())
        .env_remove("PHOTO_ORGANIZE_INPUT")
        .env_remove("PHOTO_ORGANIZE_OUTPUT")
        .arg(temp_dir.path())
        .status()
        .unwrap();

    assert!(!status.success());
}

//! Tests driving the `submitfmt` binary.

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn write_inputs(temp_dir: &TempDir) {
    fs::write(
        temp_dir.path().join("files.txt"),
        "unknown/10023.jpg\nunknown/7.jpg\nunknown/512.jpg\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("preds.csv"),
        indoc! {"
            # cat,dog
            0.25,0.75
            0.999,0.001
            0.5,0.5
        "},
    )
    .unwrap();
}

fn submitfmt(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("submitfmt").unwrap();
    cmd.current_dir(temp_dir.path())
        .env_remove("SUBMITFMT_OUTPUT_DIR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_format_writes_into_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(&temp_dir);
    fs::create_dir(temp_dir.path().join("data")).unwrap();

    let output = submitfmt(&temp_dir)
        .args(["format", "--filenames", "files.txt", "--predictions", "preds.csv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File saved as data"), "stdout: {}", stdout);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("data").join("subm_full.csv")).unwrap(),
        "id,label\n7,0.02000\n512,0.50000\n10023,0.75000\n"
    );
}

#[test]
fn test_format_custom_name_and_create_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(&temp_dir);

    submitfmt(&temp_dir)
        .args([
            "format",
            "--filenames",
            "files.txt",
            "--predictions",
            "preds.csv",
            "--output-dir",
            "out",
            "--output-name",
            "run2.csv",
            "--create-dir",
        ])
        .assert()
        .success();

    assert!(temp_dir.path().join("out").join("run2.csv").is_file());
}

#[test]
fn test_format_fails_without_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(&temp_dir);

    let output = submitfmt(&temp_dir)
        .args(["format", "--filenames", "files.txt", "--predictions", "preds.csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("data").exists());
}

#[test]
fn test_format_reports_shape_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(&temp_dir);
    fs::create_dir(temp_dir.path().join("data")).unwrap();
    fs::write(temp_dir.path().join("preds.csv"), "0.1,0.9\n").unwrap();

    let output = submitfmt(&temp_dir)
        .args(["format", "--filenames", "files.txt", "--predictions", "preds.csv"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Shape mismatch"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("data").join("subm_full.csv").exists());
}

#[test]
fn test_config_file_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(&temp_dir);
    fs::write(
        temp_dir.path().join(".submitfmt.toml"),
        indoc! {r#"
            [output]
            dir = "results"
            file_name = "from_config.csv"
            create_dir = true
            precision = 2
        "#},
    )
    .unwrap();

    submitfmt(&temp_dir)
        .args(["format", "--filenames", "files.txt", "--predictions", "preds.csv"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("results").join("from_config.csv")).unwrap(),
        "id,label\n7,0.02\n512,0.50\n10023,0.75\n"
    );
}

#[test]
fn test_init_then_refuse_overwrite() {
    let temp_dir = TempDir::new().unwrap();

    submitfmt(&temp_dir).arg("init").assert().success();
    assert!(temp_dir.path().join(".submitfmt.toml").is_file());

    submitfmt(&temp_dir).arg("init").assert().failure();
    submitfmt(&temp_dir).args(["init", "--force"]).assert().success();
}

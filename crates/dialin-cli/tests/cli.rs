use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RECORDS: &str = r#"[
  {
    "phone_number": "18005551234",
    "is_toll_free": true,
    "country": "US",
    "city": "Seattle",
    "conference_id": "123456789"
  },
  {
    "phone_number": "14255550100",
    "is_toll_free": false,
    "country": null,
    "city": null,
    "conference_id": null
  }
]"#;

fn run_cmd(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("dialin")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("dialin")
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn write_records(dir: &Path) -> String {
    let path = dir.join("records.json");
    fs::write(&path, RECORDS).expect("write records");
    path.to_str().expect("records path").to_string()
}

#[test]
fn show_renders_panel() {
    let temp = TempDir::new().expect("temp dir");
    let records = write_records(temp.path());

    let out = run_cmd(&["show", "--records", &records]);
    assert!(out.contains("+1 (800) 555-1234  Toll-free"));
    assert!(out.contains("US, Seattle"));
    assert!(out.contains("+1 (425) 555-0100  Toll"));
    assert!(out.contains("123 456 789#"));
    assert!(out.contains("Wait to be admitted"));
}

#[test]
fn show_emits_json_panel() {
    let temp = TempDir::new().expect("temp dir");
    let records = write_records(temp.path());

    let panel = run_cmd_json(&["show", "--records", &records]);
    let phones = panel["phones"].as_array().expect("phones array");
    assert_eq!(phones.len(), 2);
    assert_eq!(phones[0]["display_number"], "+1 (800) 555-1234");
    assert_eq!(phones[0]["toll_label"], "Toll-free");
    assert_eq!(phones[1]["geography"], "");
    assert_eq!(panel["meeting_id"], "123 456 789#");
}

#[test]
fn show_reads_records_path_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let records = write_records(temp.path());
    let config_path = temp.path().join("config.toml");
    fs::write(
        &config_path,
        format!("records_path = \"{records}\"\n[strings]\ntoll_free_label = \"Free of charge\"\n"),
    )
    .expect("write config");

    let out = run_cmd(&["--config", config_path.to_str().expect("path"), "show"]);
    assert!(out.contains("+1 (800) 555-1234  Free of charge"));
}

#[test]
fn show_without_records_fails_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "").expect("write config");

    let output = cargo_bin_cmd!("dialin")
        .args(["--config", config_path.to_str().expect("path"), "show"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn show_missing_records_file_fails_with_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("absent.json");

    let output = cargo_bin_cmd!("dialin")
        .args(["show", "--records", missing.to_str().expect("path")])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn blank_locale_override_fails_with_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[strings]\ntoll_label = \"  \"\n").expect("write config");

    let output = cargo_bin_cmd!("dialin")
        .args([
            "--verbose",
            "--config",
            config_path.to_str().expect("path"),
            "meeting-id",
        ])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("toll_label"));
}

#[test]
fn completions_emit_a_script() {
    let out = run_cmd(&["completions", "bash"]);
    assert!(out.contains("dialin"));
}

#[test]
fn phone_formats_number() {
    let out = run_cmd(&["phone", "15551234567"]);
    assert_eq!(out.trim_end(), "+1 (555) 123-4567");

    let out = run_cmd(&["phone", "--no-country-code", "15551234567"]);
    assert_eq!(out.trim_end(), "1 (555) 123-4567");
}

#[test]
fn phone_emits_json() {
    let value = run_cmd_json(&["phone", "15551234567"]);
    assert_eq!(value["input"], "15551234567");
    assert_eq!(value["formatted"], "+1 (555) 123-4567");
}

#[test]
fn meeting_id_formats_nine_characters() {
    let out = run_cmd(&["meeting-id", "123456789"]);
    assert_eq!(out.trim_end(), "123 456 789#");

    let out = run_cmd(&["meeting-id", "12345"]);
    assert_eq!(out.trim_end(), "12345");

    let out = run_cmd(&["meeting-id"]);
    assert_eq!(out.trim_end(), "");
}

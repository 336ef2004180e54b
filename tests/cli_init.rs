use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn blogz(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("blogz").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("BLOGZ_DATA_FILE")
        .env_remove("BLOGZ_ADDRESS")
        .env_remove("BLOGZ_PORT")
        .env_remove("BLOGZ_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_creates_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    blogz(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty post store"));

    let raw = fs::read_to_string(temp_dir.path().join("data.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_init_keeps_existing_posts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("posts.json");
    let seeded = r#"[{"id": 1, "author": "Ann", "title": "Keep me", "content": ""}]"#;
    fs::write(&data_file, seeded).unwrap();

    blogz(&temp_dir)
        .arg("--data")
        .arg(&data_file)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized (1 posts)"));

    assert_eq!(fs::read_to_string(&data_file).unwrap(), seeded);
}

#[test]
fn test_config_reads_toml_and_flags() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("blogz.toml"),
        "data_file = \"from-file.json\"\nport = 8123\n",
    )
    .unwrap();

    blogz(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data_file = from-file.json"))
        .stdout(predicate::str::contains("port = 8123"));

    blogz(&temp_dir)
        .args(["config", "--data", "from-flag.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_file = from-flag.json"))
        .stdout(predicate::str::contains("port = 8123"));
}

#[test]
fn test_config_env_overrides_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("blogz.toml"), "port = 8123\n").unwrap();

    blogz(&temp_dir)
        .env("BLOGZ_PORT", "9001")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 9001"));
}

#[test]
fn test_bad_config_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("blogz.toml"), "port = \"many\"\n").unwrap();

    blogz(&temp_dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration specs: `--config` and `SONGQ_CONFIG`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn songq() -> Command {
    let mut cmd = cargo_bin_cmd!("songq");
    cmd.env_remove("SONGQ_CONFIG");
    cmd
}

fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("songq.toml");
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Backend fields
// =============================================================================

#[test]
fn config_limits_supported_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[backend]\nfields = [\"title\", \"artist\"]\n");

    songq()
        .args(["compile", "love rating:4", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("add title contains \"love\""))
        .stdout(predicate::str::contains("album").not())
        .stdout(predicate::str::contains("rating").not());
}

#[test]
fn fields_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[backend]\nfields = [\"title\"]\n");

    songq()
        .args(["compile", "rating:4", "--fields", "rating", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("add_number rating = 8"));
}

#[test]
fn fields_command_marks_unsupported() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[backend]\nfields = [\"title\"]\n");

    songq()
        .arg("fields")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("artist       text     default, unsupported"));
}

// =============================================================================
// Date formats
// =============================================================================

#[test]
fn config_short_date_formats() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[dates]\nshort_formats = [\"%d/%m/%Y\"]\n");

    songq()
        .args(["date", "25/12/1990", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("absolute 1990-12-25T00:00:00Z (662083200)\n");
}

#[test]
fn env_var_names_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[dates]\nshort_formats = [\"%d/%m/%Y\"]\n");

    songq()
        .env("SONGQ_CONFIG", &path)
        .args(["date", "25/12/1990"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("absolute"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_config_file_fails() {
    songq()
        .args(["fields", "--config", "/nonexistent/songq.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[yare::parameterized(
    unknown_field = { "[backend]\nfields = [\"colour\"]\n", "unknown field" },
    bad_format = { "[dates]\nshort_formats = [\"%Q\"]\n", "invalid date format" },
    bad_toml = { "[backend\n", "failed to parse config" },
)]
fn invalid_config_fails(content: &str, message: &str) {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, content);

    songq()
        .args(["compile", "love", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(message));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fields command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn songq() -> Command {
    cargo_bin_cmd!("songq")
}

#[test]
fn fields_lists_names_and_kinds() {
    songq()
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("artist       text     default"))
        .stdout(predicate::str::contains("filesize     filesize"))
        .stdout(predicate::str::contains("lastplayed   date"))
        .stdout(predicate::str::contains("unsupported").not())
        .stdout(predicate::str::contains("formats: mp3, ogg, flac"));
}

#[test]
fn fields_json_has_every_field() {
    let output = songq().args(["fields", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 25);
    assert!(rows.iter().all(|r| r["supported"] == true));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date command specs.
//!
//! Relative values depend on the current time, so these specs check the
//! shape of the output and only pin exact values for absolute dates.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn songq() -> Command {
    cargo_bin_cmd!("songq")
}

#[yare::parameterized(
    dotted = { "25.12.1990", "absolute 1990-12-25T00:00:00Z (662083200)\n" },
    iso = { "1990-12-25", "absolute 1990-12-25T00:00:00Z (662083200)\n" },
    us = { "12/25/1990", "absolute 1990-12-25T00:00:00Z (662083200)\n" },
)]
fn date_absolute(text: &str, expected: &str) {
    songq().args(["date", text]).assert().success().stdout(expected);
}

#[yare::parameterized(
    shorthand = { "2w3d" },
    phrase = { "last week" },
    today = { "today" },
)]
fn date_relative(text: &str) {
    songq()
        .args(["date", text])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("relative "));
}

#[yare::parameterized(
    word = { "someday" },
    bare_number = { "1990" },
    impossible = { "31.02.2020" },
)]
fn date_invalid(text: &str) {
    songq()
        .args(["date", text])
        .assert()
        .success()
        .stdout("invalid date\n");
}

#[test]
fn date_json_output() {
    let output = songq()
        .args(["date", "1d", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["input"], "1d");
    assert_eq!(json["valid"], true);
    assert_eq!(json["is_absolute"], false);
    assert!(json["value"].as_i64().unwrap() > 0);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn songq() -> Command {
    cargo_bin_cmd!("songq")
}

// =============================================================================
// Text output
// =============================================================================

#[test]
fn parse_shows_one_group_per_and_term() {
    songq()
        .args([
            "parse",
            "love artist:cure album:\"Best of\" year:<1990 playcount:>2 -score:<50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("group 1: any contains \"love\""))
        .stdout(predicate::str::contains("group 3: album contains \"Best of\""))
        .stdout(predicate::str::contains("group 4: year less-than \"1990\""))
        .stdout(predicate::str::contains("group 6: not score less-than \"50\""))
        .stdout(predicate::str::contains("group 7").not());
}

#[test]
fn parse_or_run_is_one_group() {
    songq()
        .args(["parse", "artist:cure OR album:\"Best of\" OR year:2009"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "group 1: artist contains \"cure\" OR album contains \"Best of\" OR year contains \"2009\"",
        ))
        .stdout(predicate::str::contains("group 2").not());
}

#[test]
fn parse_prints_normalized_form() {
    songq()
        .args(["parse", "artist:\"The Cure\"   -genre:=live"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "normalized: artist:\"The Cure\" -genre:=live",
        ));
}

#[yare::parameterized(
    empty = { "" },
    blank = { "   " },
    lone_minus = { "-" },
)]
fn parse_empty_input(input: &str) {
    songq()
        .args(["parse", input])
        .assert()
        .success()
        .stdout("(empty expression)\n");
}

#[test]
fn parse_unterminated_quote_is_not_an_error() {
    songq()
        .args(["parse", "artist:\"The Cu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("artist contains \"The Cu\""));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn parse_json_output() {
    let output = songq()
        .args(["parse", "-artist:=Cure OR rating:>3", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let group = json["groups"][0].as_array().unwrap();
    assert_eq!(group.len(), 2);
    assert_eq!(group[0]["field"], "artist");
    assert_eq!(group[0]["negate"], true);
    assert_eq!(group[0]["match_kind"], "equals");
    assert_eq!(group[1]["match_kind"], "greater_than");
}

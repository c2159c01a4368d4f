// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command specs.

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
// Field kinds
// =============================================================================

#[test]
fn compile_rating_doubles() {
    songq()
        .args(["compile", "rating:4"])
        .assert()
        .success()
        .stdout("begin_or\n  begin_or\n    add_number rating = 8\n  end\nend\n");
}

#[yare::parameterized(
    length = { "length:<200", "add_number length < 200000" },
    filesize_less = { "filesize:<2", "add_number filesize < 2097152" },
    format = { "format:FLAC", "add_number format = 3" },
    exact_text = { "artist:=Cure", "add artist equals \"Cure\"" },
    negated = { "-genre:live", "exclude genre contains \"live\"" },
    lenient_number = { "bpm:fast", "add_number bpm = 0" },
)]
fn compile_emits(expression: &str, expected: &str) {
    songq()
        .args(["compile", expression])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn compile_filesize_equals_is_range() {
    songq()
        .args(["compile", "filesize:100"])
        .assert()
        .success()
        .stdout(
            "begin_or\n  begin_or\n  end\n  begin_and\n    add_number filesize > 104857600\n    add_number filesize < 105906176\n  end\nend\n",
        );
}

#[test]
fn compile_unknown_field_is_empty_scope() {
    songq()
        .args(["compile", "colour:red"])
        .assert()
        .success()
        .stdout("begin_or\n  begin_or\n  end\nend\n");
}

#[test]
fn compile_unqualified_searches_supported_defaults() {
    songq()
        .args(["compile", "love", "--fields", "title,artist,comment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add title contains \"love\""))
        .stdout(predicate::str::contains("add artist contains \"love\""))
        .stdout(predicate::str::contains("add url").not())
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn compile_negated_unqualified_nests_scopes() {
    let output = songq()
        .args(["compile", "-live", "--fields", "title,artist"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    similar_asserts::assert_eq!(
        lines,
        vec![
            "begin_or",
            "  begin_and",
            "    begin_or",
            "      exclude title contains \"live\"",
            "      exclude artist contains \"live\"",
            "    end",
            "  end",
            "end",
        ]
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn compile_malformed_filesize_fails() {
    songq()
        .args(["compile", "artist:cure filesize:big"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error: invalid number for filesize"));
}

#[test]
fn compile_unknown_supported_field_fails() {
    songq()
        .args(["compile", "love", "--fields", "title,colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field: 'colour'"));
}

// =============================================================================
// JSON output
// =============================================================================

#[test]
fn compile_json_output() {
    let output = songq()
        .args(["compile", "year:<1990", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["normalized"], "year:<1990");
    let calls = json["calls"].as_array().unwrap();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[2]["call"], "add_number_filter");
    assert_eq!(calls[2]["field"], "year");
    assert_eq!(calls[2]["value"], 1990);
    assert_eq!(calls[2]["comparison"], "less_than");
}

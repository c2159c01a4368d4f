// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn songq() -> Command {
    cargo_bin_cmd!("songq")
}

// =============================================================================
// Script generation
// =============================================================================

#[yare::parameterized(
    bash = { "bash", "complete" },
    zsh = { "zsh", "#compdef" },
    fish = { "fish", "complete" },
)]
fn completion_generates_script(shell: &str, marker: &str) {
    let output = songq().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completion output should not be empty");
    assert!(stdout.contains(marker), "{shell} script should contain '{marker}'");
}

#[test]
fn completion_bash_references_subcommands() {
    let output = songq().args(["completion", "bash"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for sub in ["parse", "compile", "date", "fields", "advanced"] {
        assert!(stdout.contains(sub), "bash completion should mention {sub}");
    }
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn completion_invalid_shell_fails() {
    songq()
        .args(["completion", "invalid_shell"])
        .assert()
        .failure();
}

#[test]
fn completion_ignores_missing_config() {
    songq()
        .args(["completion", "bash", "--config", "/nonexistent/songq.toml"])
        .assert()
        .success();
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Advanced-syntax detection specs.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

fn songq() -> Command {
    cargo_bin_cmd!("songq")
}

#[yare::parameterized(
    plain_words = { "love song", "false\n" },
    field = { "artist:cure", "true\n" },
    quote = { "\"the cure\"", "true\n" },
    minus = { "-live", "true\n" },
    or_keyword = { "a OR b", "true\n" },
    substring = { "android", "true\n" },
)]
fn advanced_detection(input: &str, expected: &str) {
    songq()
        .args(["advanced", input])
        .assert()
        .success()
        .stdout(expected);
}

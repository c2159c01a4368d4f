// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box specs for the `songq` binary.
//!
//! The spec files under `cli/` are compiled as integration tests of the
//! `songq` package (see its `[[test]]` entries) so that `cargo_bin_cmd!`
//! can locate the binary.

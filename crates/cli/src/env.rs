// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by songq are named in [`vars`]
//! and read through the typed accessors below.

use std::path::PathBuf;

/// Environment variable names.
pub mod vars {
    /// Path to a `songq.toml`, used when `--config` is absent.
    pub const SONGQ_CONFIG: &str = "SONGQ_CONFIG";
    /// Log filter directives for the tracing subscriber.
    pub const SONGQ_LOG: &str = "SONGQ_LOG";
    pub const NO_COLOR: &str = "NO_COLOR";
    pub const COLOR: &str = "COLOR";
}

/// Returns the value of `SONGQ_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::SONGQ_CONFIG)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

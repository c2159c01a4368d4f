// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sq-core operations.

use thiserror::Error;

/// All possible errors that can occur while compiling a search expression.
///
/// Most malformed input is tolerated by the parser and compiler. Only the
/// variants below are surfaced to callers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid number for {field}: '{text}'\n  hint: {field} expects a numeric value")]
    InvalidNumber { field: String, text: String },

    #[error("unknown field: '{0}'\n  hint: run 'songq fields' to list valid names")]
    UnknownField(String),

    #[error("invalid date format '{format}': {reason}")]
    InvalidDateFormat { format: String, reason: String },
}

/// A specialized Result type for sq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The query-building interface the compiler drives.
//!
//! A storage backend implements [`QueryBuilder`]; the compiler issues an
//! ordered sequence of scope and filter calls against it. Consecutive
//! filters inside a scope are combined with that scope's operator, and
//! top-level scopes are ANDed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::{Field, FilterMask};

/// Comparison for numeric filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberComparison {
    Equals,
    LessThan,
    GreaterThan,
}

impl NumberComparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            NumberComparison::Equals => "=",
            NumberComparison::LessThan => "<",
            NumberComparison::GreaterThan => ">",
        }
    }
}

impl fmt::Display for NumberComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A backend that accepts compiled filter calls.
pub trait QueryBuilder {
    /// Opens a scope whose children are ORed.
    fn begin_or(&mut self);

    /// Opens a scope whose children are ANDed.
    fn begin_and(&mut self);

    /// Closes the innermost scope.
    fn end_scope(&mut self);

    /// Requires `field` to match `text`. With both anchors set the match is exact.
    fn add_filter(&mut self, field: Field, text: &str, match_start: bool, match_end: bool);

    /// Requires `field` not to match `text`.
    fn exclude_filter(&mut self, field: Field, text: &str, match_start: bool, match_end: bool);

    /// Requires `field` to compare against `value`.
    fn add_number_filter(&mut self, field: Field, value: i64, comparison: NumberComparison);

    /// Requires `field` not to compare against `value`.
    fn exclude_number_filter(&mut self, field: Field, value: i64, comparison: NumberComparison);

    /// The fields this backend can filter on.
    fn supported_filters(&self) -> FilterMask;
}

/// One call made against a [`QueryBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum BuilderCall {
    BeginOr,
    BeginAnd,
    EndScope,
    AddFilter {
        field: Field,
        text: String,
        match_start: bool,
        match_end: bool,
    },
    ExcludeFilter {
        field: Field,
        text: String,
        match_start: bool,
        match_end: bool,
    },
    AddNumberFilter {
        field: Field,
        value: i64,
        comparison: NumberComparison,
    },
    ExcludeNumberFilter {
        field: Field,
        value: i64,
        comparison: NumberComparison,
    },
}

fn text_op(match_start: bool, match_end: bool) -> &'static str {
    match (match_start, match_end) {
        (true, true) => "equals",
        (true, false) => "starts-with",
        (false, true) => "ends-with",
        (false, false) => "contains",
    }
}

impl fmt::Display for BuilderCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderCall::BeginOr => f.write_str("begin_or"),
            BuilderCall::BeginAnd => f.write_str("begin_and"),
            BuilderCall::EndScope => f.write_str("end"),
            BuilderCall::AddFilter {
                field,
                text,
                match_start,
                match_end,
            } => write!(f, "add {field} {} {text:?}", text_op(*match_start, *match_end)),
            BuilderCall::ExcludeFilter {
                field,
                text,
                match_start,
                match_end,
            } => write!(f, "exclude {field} {} {text:?}", text_op(*match_start, *match_end)),
            BuilderCall::AddNumberFilter {
                field,
                value,
                comparison,
            } => write!(f, "add_number {field} {comparison} {value}"),
            BuilderCall::ExcludeNumberFilter {
                field,
                value,
                comparison,
            } => write!(f, "exclude_number {field} {comparison} {value}"),
        }
    }
}

/// A [`QueryBuilder`] that records every call, for inspection and display.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuilder {
    supported: FilterMask,
    calls: Vec<BuilderCall>,
}

impl RecordingBuilder {
    /// Creates a builder that supports every field.
    pub fn new() -> Self {
        Self::with_supported(FilterMask::all())
    }

    /// Creates a builder that supports only the fields in `supported`.
    pub fn with_supported(supported: FilterMask) -> Self {
        RecordingBuilder {
            supported,
            calls: Vec::new(),
        }
    }

    /// The calls recorded so far, in order.
    pub fn calls(&self) -> &[BuilderCall] {
        &self.calls
    }

    /// Consumes the builder, returning the recorded calls.
    pub fn into_calls(self) -> Vec<BuilderCall> {
        self.calls
    }

    /// Current scope nesting depth. Zero when every scope has been closed.
    pub fn depth(&self) -> i64 {
        self.calls.iter().fold(0, |depth, call| match call {
            BuilderCall::BeginOr | BuilderCall::BeginAnd => depth + 1,
            BuilderCall::EndScope => depth - 1,
            _ => depth,
        })
    }
}

impl QueryBuilder for RecordingBuilder {
    fn begin_or(&mut self) {
        self.calls.push(BuilderCall::BeginOr);
    }

    fn begin_and(&mut self) {
        self.calls.push(BuilderCall::BeginAnd);
    }

    fn end_scope(&mut self) {
        self.calls.push(BuilderCall::EndScope);
    }

    fn add_filter(&mut self, field: Field, text: &str, match_start: bool, match_end: bool) {
        self.calls.push(BuilderCall::AddFilter {
            field,
            text: text.to_string(),
            match_start,
            match_end,
        });
    }

    fn exclude_filter(&mut self, field: Field, text: &str, match_start: bool, match_end: bool) {
        self.calls.push(BuilderCall::ExcludeFilter {
            field,
            text: text.to_string(),
            match_start,
            match_end,
        });
    }

    fn add_number_filter(&mut self, field: Field, value: i64, comparison: NumberComparison) {
        self.calls.push(BuilderCall::AddNumberFilter {
            field,
            value,
            comparison,
        });
    }

    fn exclude_number_filter(&mut self, field: Field, value: i64, comparison: NumberComparison) {
        self.calls.push(BuilderCall::ExcludeNumberFilter {
            field,
            value,
            comparison,
        });
    }

    fn supported_filters(&self) -> FilterMask {
        self.supported
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

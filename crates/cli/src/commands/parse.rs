// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use sq_core::{parse, FilterElement, MatchKind};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::write_json;

pub fn run(expression: &str, output: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_impl(&mut out, expression, output)
}

pub(crate) fn run_impl<W: Write>(out: &mut W, expression: &str, output: OutputFormat) -> Result<()> {
    let expr = parse(expression);

    match output {
        OutputFormat::Text => {
            if expr.is_empty() {
                writeln!(out, "(empty expression)")?;
                return Ok(());
            }
            for (i, group) in expr.iter().enumerate() {
                let terms: Vec<String> = group.iter().map(describe).collect();
                writeln!(out, "group {}: {}", i + 1, terms.join(" OR "))?;
            }
            writeln!(out, "normalized: {}", expr)?;
        }
        OutputFormat::Json => write_json(out, &expr)?,
    }
    Ok(())
}

/// One element in words, e.g. `not score less-than "50"`.
pub(crate) fn describe(element: &FilterElement) -> String {
    let field = if element.is_unqualified() {
        "any"
    } else {
        element.field.as_str()
    };
    let op = match element.match_kind {
        MatchKind::Contains => "contains",
        MatchKind::Equals => "equals",
        MatchKind::LessThan => "less-than",
        MatchKind::GreaterThan => "greater-than",
    };
    let not = if element.negate { "not " } else { "" };
    format!("{not}{field} {op} {:?}", element.text)
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

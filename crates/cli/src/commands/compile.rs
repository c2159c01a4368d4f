// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use sq_core::{
    compile, parse, BuilderCall, ClockSource, DateResolver, FilterMask, RecordingBuilder,
};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

use super::write_json;

#[derive(Serialize)]
struct CompileOutput<'a> {
    normalized: String,
    calls: &'a [BuilderCall],
}

pub fn run(config: &Config, expression: &str, fields: &[String], output: OutputFormat) -> Result<()> {
    let supported = if fields.is_empty() {
        config.filter_mask()?
    } else {
        FilterMask::from_names(fields)?
    };
    let dates = DateResolver::with_options(config.date_options()?);
    let mut out = std::io::stdout().lock();
    run_impl(&mut out, expression, supported, &dates, output)
}

pub(crate) fn run_impl<W: Write, C: ClockSource>(
    out: &mut W,
    expression: &str,
    supported: FilterMask,
    dates: &DateResolver<C>,
    output: OutputFormat,
) -> Result<()> {
    let expr = parse(expression);
    let mut qb = RecordingBuilder::with_supported(supported);

    if let Err(e) = compile(&expr, &mut qb, dates) {
        debug!("compile aborted after {} calls", qb.calls().len());
        return Err(e.into());
    }

    match output {
        OutputFormat::Text => {
            for line in indented(qb.calls()) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => write_json(
            out,
            &CompileOutput {
                normalized: expr.to_string(),
                calls: qb.calls(),
            },
        )?,
    }
    Ok(())
}

/// One line per call, indented two spaces per open scope.
pub(crate) fn indented(calls: &[BuilderCall]) -> Vec<String> {
    let mut depth = 0usize;
    calls
        .iter()
        .map(|call| {
            if *call == BuilderCall::EndScope {
                depth = depth.saturating_sub(1);
            }
            let line = format!("{}{}", "  ".repeat(depth), call);
            if matches!(call, BuilderCall::BeginOr | BuilderCall::BeginAnd) {
                depth += 1;
            }
            line
        })
        .collect()
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;

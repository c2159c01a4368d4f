// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use chrono::{DateTime, SecondsFormat};
use serde::Serialize;

use sq_core::{ClockSource, DateResolution, DateResolver};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

use super::write_json;

#[derive(Serialize)]
struct DateOutput<'a> {
    input: &'a str,
    valid: bool,
    value: i64,
    is_absolute: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    utc: Option<String>,
}

pub fn run(config: &Config, text: &str, output: OutputFormat) -> Result<()> {
    let dates = DateResolver::with_options(config.date_options()?);
    let mut out = std::io::stdout().lock();
    run_impl(&mut out, text, &dates, output)
}

pub(crate) fn run_impl<W: Write, C: ClockSource>(
    out: &mut W,
    text: &str,
    dates: &DateResolver<C>,
    output: OutputFormat,
) -> Result<()> {
    let resolution = dates.resolve(text);

    match output {
        OutputFormat::Text => writeln!(out, "{}", format_resolution(&resolution))?,
        OutputFormat::Json => write_json(
            out,
            &DateOutput {
                input: text,
                valid: resolution.is_valid(),
                value: resolution.value,
                is_absolute: resolution.is_absolute,
                utc: utc_string(&resolution),
            },
        )?,
    }
    Ok(())
}

fn utc_string(resolution: &DateResolution) -> Option<String> {
    if !resolution.is_valid() {
        return None;
    }
    DateTime::from_timestamp(resolution.value, 0)
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// E.g. `relative 2024-06-14T12:00:00Z (1718366400)`.
pub(crate) fn format_resolution(resolution: &DateResolution) -> String {
    match utc_string(resolution) {
        Some(utc) => {
            let kind = if resolution.is_absolute {
                "absolute"
            } else {
                "relative"
            };
            format!("{} {} ({})", kind, utc, resolution.value)
        }
        None => "invalid date".to_string(),
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use serde::Serialize;

use sq_core::{Field, FieldKind, FileType, FilterMask};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

use super::write_json;

#[derive(Serialize)]
struct FieldRow {
    name: &'static str,
    kind: FieldKind,
    supported: bool,
    default_text: bool,
}

pub fn run(config: &Config, output: OutputFormat) -> Result<()> {
    let supported = config.filter_mask()?;
    let mut out = std::io::stdout().lock();
    run_impl(&mut out, supported, output)
}

pub(crate) fn run_impl<W: Write>(out: &mut W, supported: FilterMask, output: OutputFormat) -> Result<()> {
    let rows: Vec<FieldRow> = Field::ALL
        .iter()
        .map(|field| FieldRow {
            name: field.as_str(),
            kind: field.kind(),
            supported: supported.supports(*field),
            default_text: Field::DEFAULT_TEXT.contains(field),
        })
        .collect();

    match output {
        OutputFormat::Text => {
            for row in &rows {
                let mut notes = Vec::new();
                if row.default_text {
                    notes.push("default");
                }
                if !row.supported {
                    notes.push("unsupported");
                }
                let line = format!("{:<12} {:<8} {}", row.name, row.kind.as_str(), notes.join(", "));
                writeln!(out, "{}", line.trim_end())?;
            }
            let formats: Vec<&str> = FileType::KNOWN.iter().map(FileType::as_str).collect();
            writeln!(out)?;
            writeln!(out, "formats: {}", formats.join(", "))?;
        }
        OutputFormat::Json => write_json(out, &rows)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;

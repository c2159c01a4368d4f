// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod advanced;
pub mod compile;
pub mod date;
pub mod fields;
pub mod parse;

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Writes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

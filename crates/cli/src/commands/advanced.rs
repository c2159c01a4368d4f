// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use sq_core::is_advanced_expression;

use crate::error::Result;

pub fn run(expression: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_impl(&mut out, expression)
}

pub(crate) fn run_impl<W: Write>(out: &mut W, expression: &str) -> Result<()> {
    writeln!(out, "{}", is_advanced_expression(expression))?;
    Ok(())
}

#[cfg(test)]
#[path = "advanced_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use anstyle::{Ansi256Color, Color, Style};
use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and quoted values: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// A foreground-only style for a 256-color code.
pub fn fg(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

fn paint(code: u8, text: &str) -> String {
    let style = fg(code);
    format!("{style}{text}{style:#}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples block when colors are enabled.
///
/// ```text
/// Examples:
///   songq parse "a OR b"      Show the groups
/// ```
pub fn examples(text: &str) -> String {
    if should_colorize() {
        colorize_examples(text)
    } else {
        text.to_string()
    }
}

/// Headers (lines ending in `:`) get the header color. In example lines the
/// command gets the literal color, with quoted arguments as context, and the
/// description after two or more spaces is left plain.
pub fn colorize_examples(text: &str) -> String {
    let mut lines = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }

    lines.join("\n")
}

/// Colors a command line, with double-quoted segments as context.
pub fn colorize_command(cmd: &str) -> String {
    let parts: Vec<&str> = cmd.split('"').collect();
    let mut result = String::with_capacity(cmd.len() + 64);

    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            if !part.is_empty() {
                result.push_str(&literal(part));
            }
        } else if i + 1 < parts.len() {
            result.push_str(&context(&format!("\"{part}\"")));
        } else {
            // unterminated quote
            result.push_str(&context(&format!("\"{part}")));
        }
    }

    result
}

/// Find where the description starts (the first run of 2+ spaces).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    let desc = rest.trim_start();
    if desc.is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;

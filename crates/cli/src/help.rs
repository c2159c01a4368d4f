// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let header = colors::fg(colors::codes::HEADER);
    let literal = colors::fg(colors::codes::LITERAL);
    let context = colors::fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Expression syntax summary shown after the main help.
pub fn syntax() -> String {
    colors::examples(
        "\
Expression syntax:
  love                      Any default text field contains \"love\"
  artist:cure               Artist contains \"cure\"
  artist:=Cure              Artist is exactly \"Cure\"
  year:<1990 rating:>3      Numeric comparisons
  -genre:live               Exclude matches
  a OR b                    Either term
  lastplayed:<2w            Played within the last two weeks",
    )
}

pub fn parse_examples() -> String {
    colors::examples(
        "\
Examples:
  songq parse \"love artist:cure\"         Show groups and the normalized form
  songq parse \"a OR b\" -o json           Emit the parsed expression as JSON",
    )
}

pub fn compile_examples() -> String {
    colors::examples(
        "\
Examples:
  songq compile \"rating:4\"               Show builder calls
  songq compile love --fields title,url  Restrict the backend's fields
  songq compile \"size:10\" -o json        Emit calls as JSON",
    )
}

pub fn date_examples() -> String {
    colors::examples(
        "\
Examples:
  songq date 2w3d                        Two weeks and three days ago
  songq date \"last month\"                A relative phrase
  songq date 25.12.1990                  An absolute date",
    )
}

pub fn completion_examples() -> String {
    colors::examples(
        "\
Examples:
  songq completion bash > ~/.local/share/bash-completion/completions/songq
  songq completion zsh > ~/.zfunc/_songq
  songq completion fish > ~/.config/fish/completions/songq.fish",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;

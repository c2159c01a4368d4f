// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sqrs - the library behind the `songq` command.
//!
//! `songq` is a debugging front-end for [`sq_core`]: it tokenizes search
//! expressions, resolves date values and shows the calls a query backend
//! would receive, using a recording builder in place of a real store.
//!
//! # Main Components
//!
//! - [`Cli`] - Command-line definition
//! - [`Config`] - `songq.toml` loading (supported fields, date formats)
//! - [`Error`] - Error types for all operations

mod cli;
mod colors;
mod commands;
mod help;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = || Config::resolve(cli.config.as_deref());
    match cli.command {
        Command::Parse { expression, output } => commands::parse::run(&expression, output),
        Command::Compile {
            expression,
            fields,
            output,
        } => commands::compile::run(&config()?, &expression, &fields, output),
        Command::Date { text, output } => commands::date::run(&config()?, &text, output),
        Command::Fields { output } => commands::fields::run(&config()?, output),
        Command::Advanced { expression } => commands::advanced::run(&expression),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "songq", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "songq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse, explain and compile music collection search expressions")]
#[command(after_help = help::syntax())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Read configuration from <path> (default: $SONGQ_CONFIG)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize an expression and show its groups
    #[command(after_help = help::parse_examples())]
    Parse {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Compile an expression and show the query builder calls
    #[command(after_help = help::compile_examples())]
    Compile {
        /// Search expression
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Fields the backend supports (default: from config, else all)
        #[arg(long, value_delimiter = ',', value_name = "names")]
        fields: Vec<String>,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Resolve a date value as a date field would
    #[command(after_help = help::date_examples())]
    Date {
        /// Date text, e.g. 2w, "last week" or 25.12.1990
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List field names, kinds and backend support
    Fields {
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Report whether input uses expression syntax
    Advanced {
        /// Search input
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Generate shell completions
    #[command(after_help = help::completion_examples())]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

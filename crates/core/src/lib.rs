// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sq-core: search expressions for a music collection
//!
//! This crate tokenizes user-typed search text such as
//! `artist:cure year:<1990 -genre:=live` into a [`ParsedExpression`] and
//! compiles it into calls on a backend's [`QueryBuilder`]. It is shared by
//! the songq CLI and any storage backend that implements the builder.

pub mod builder;
pub mod compiler;
pub mod date;
pub mod error;
pub mod expression;
pub mod field;
pub mod file_type;
pub mod parser;

pub use builder::{BuilderCall, NumberComparison, QueryBuilder, RecordingBuilder};
pub use compiler::{compile, compile_text};
pub use date::{ClockSource, DateOptions, DateResolution, DateResolver, SystemClock};
pub use error::{Error, Result};
pub use expression::{FilterElement, MatchKind, OrGroup, ParsedExpression};
pub use field::{Field, FieldKind, FilterMask};
pub use file_type::FileType;
pub use parser::{is_advanced_expression, parse};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of parsed expressions into query-builder calls.
//!
//! Each OR-group becomes an OR scope. Inside it, every element gets its own
//! scope: OR for plain elements, AND for negated ones, so that `-a OR -b`
//! excludes both rather than matching anything that lacks either.
//!
//! Values are converted per field kind before they reach the builder:
//!
//! | Kind       | Typed          | Sent to the builder            |
//! |------------|----------------|--------------------------------|
//! | rating     | `4`            | `8`                            |
//! | length     | `200` seconds  | `200000` milliseconds          |
//! | filesize   | `100` MiB      | bytes, `=` becomes a 1 MiB range |
//! | format     | `flac`         | file type code                 |
//! | date       | `2w`, `1.2.2003` | Unix timestamp               |

use tracing::{debug, trace};

use crate::builder::{NumberComparison, QueryBuilder};
use crate::date::{ClockSource, DateResolver};
use crate::error::{Error, Result};
use crate::expression::{FilterElement, MatchKind, ParsedExpression};
use crate::field::{Field, FieldKind, FilterMask};
use crate::file_type::FileType;
use crate::parser::parse;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const BYTES_PER_MIB: i64 = 1024 * 1024;

/// Compile `expr` into calls on `qb`.
///
/// Elements naming an unknown field, or a field the builder does not
/// support, produce an empty scope. Dates that do not resolve are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if a `filesize` value is not a number.
/// Compilation stops at that element; calls already issued are not undone.
pub fn compile<B, C>(expr: &ParsedExpression, qb: &mut B, dates: &DateResolver<C>) -> Result<()>
where
    B: QueryBuilder,
    C: ClockSource,
{
    let supported = qb.supported_filters();

    for group in expr {
        qb.begin_or();
        for element in group {
            if element.negate {
                qb.begin_and();
            } else {
                qb.begin_or();
            }

            let mut sink = ElementSink {
                qb: &mut *qb,
                negate: element.negate,
            };
            if element.is_unqualified() {
                sink.default_fields(&element.text, supported);
            } else {
                compile_qualified(&mut sink, element, supported, dates)?;
            }

            qb.end_scope();
        }
        qb.end_scope();
    }

    Ok(())
}

/// Parse `text` and compile the result into calls on `qb`.
///
/// # Errors
///
/// See [`compile`].
pub fn compile_text<B, C>(text: &str, qb: &mut B, dates: &DateResolver<C>) -> Result<()>
where
    B: QueryBuilder,
    C: ClockSource,
{
    compile(&parse(text), qb, dates)
}

fn compile_qualified<B, C>(
    sink: &mut ElementSink<'_, B>,
    element: &FilterElement,
    supported: FilterMask,
    dates: &DateResolver<C>,
) -> Result<()>
where
    B: QueryBuilder,
    C: ClockSource,
{
    let Some(field) = Field::for_name(&element.field) else {
        debug!("skipping unknown field '{}'", element.field);
        return Ok(());
    };
    if !supported.supports(field) {
        debug!("skipping field '{}': not supported by backend", field);
        return Ok(());
    }

    trace!("compiling {} as {}", element, field.kind());

    let text = element.text.as_str();
    let comparison = comparison_for(element.match_kind);

    match field.kind() {
        FieldKind::Text => {
            let exact = element.match_kind == MatchKind::Equals;
            sink.text(field, text, exact);
        }
        FieldKind::Number => sink.number(field, lenient_int(text), comparison),
        FieldKind::Rating => sink.number(field, (lenient_float(text) * 2.0) as i64, comparison),
        FieldKind::Length => {
            sink.number(field, lenient_int(text).saturating_mul(1000), comparison)
        }
        FieldKind::Format => sink.number(field, FileType::for_name(text).code(), comparison),
        FieldKind::FileSize => {
            // Aborts with the group and element scopes left open.
            let megabytes = strict_float(text).ok_or_else(|| Error::InvalidNumber {
                field: field.to_string(),
                text: text.to_string(),
            })?;
            match comparison {
                NumberComparison::Equals => {
                    let floor = megabytes.abs().trunc() as i64;
                    sink.range(
                        field,
                        floor.saturating_mul(BYTES_PER_MIB),
                        floor.saturating_add(1).saturating_mul(BYTES_PER_MIB),
                    );
                }
                NumberComparison::LessThan | NumberComparison::GreaterThan => {
                    let bytes = (megabytes * BYTES_PER_MIB as f64) as i64;
                    sink.number(field, bytes, comparison);
                }
            }
        }
        FieldKind::Date => {
            let date = dates.resolve(text);
            if !date.is_valid() {
                debug!("skipping '{}': not a date", element);
                return Ok(());
            }
            match comparison {
                NumberComparison::Equals => sink.range(
                    field,
                    date.value.saturating_sub(SECONDS_PER_DAY),
                    date.value.saturating_add(SECONDS_PER_DAY),
                ),
                NumberComparison::LessThan | NumberComparison::GreaterThan => {
                    // Relative values count back from now, so "< 2w" means newer.
                    let newer = (comparison == NumberComparison::LessThan) != date.is_absolute;
                    let comparison = if newer {
                        NumberComparison::GreaterThan
                    } else {
                        NumberComparison::LessThan
                    };
                    sink.number(field, date.value, comparison);
                }
            }
        }
    }

    Ok(())
}

fn comparison_for(match_kind: MatchKind) -> NumberComparison {
    match match_kind {
        MatchKind::LessThan => NumberComparison::LessThan,
        MatchKind::GreaterThan => NumberComparison::GreaterThan,
        MatchKind::Equals | MatchKind::Contains => NumberComparison::Equals,
    }
}

/// Integer value, or 0 if the text is not an integer.
fn lenient_int(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Float value, or 0 if the text is not a number.
fn lenient_float(text: &str) -> f64 {
    strict_float(text).unwrap_or(0.0)
}

fn strict_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Issues add or exclude calls for one element.
struct ElementSink<'a, B> {
    qb: &'a mut B,
    negate: bool,
}

impl<B: QueryBuilder> ElementSink<'_, B> {
    fn text(&mut self, field: Field, text: &str, anchored: bool) {
        if self.negate {
            self.qb.exclude_filter(field, text, anchored, anchored);
        } else {
            self.qb.add_filter(field, text, anchored, anchored);
        }
    }

    fn number(&mut self, field: Field, value: i64, comparison: NumberComparison) {
        if self.negate {
            self.qb.exclude_number_filter(field, value, comparison);
        } else {
            self.qb.add_number_filter(field, value, comparison);
        }
    }

    /// Replaces the element's scope with an AND of `low < field < high`.
    fn range(&mut self, field: Field, low: i64, high: i64) {
        self.qb.end_scope();
        self.qb.begin_and();
        self.number(field, low, NumberComparison::GreaterThan);
        self.number(field, high, NumberComparison::LessThan);
    }

    /// Substring match against every supported default field.
    fn default_fields(&mut self, text: &str, supported: FilterMask) {
        self.qb.begin_or();
        for field in Field::DEFAULT_TEXT {
            if supported.supports(field) {
                self.text(field, text, false);
            }
        }
        self.qb.end_scope();
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;

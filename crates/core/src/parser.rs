// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer for free-text search expressions.
//!
//! Turns input such as `love artist:cure -score:<50` into a
//! [`ParsedExpression`]. The tokenizer is a small character-driven state
//! machine; it never fails, and malformed input (unterminated quotes,
//! dangling operators) degrades to a best-effort result.
//!
//! ```text
//! [-][field:][=|<|>]value        one element
//! "quoted value"                 literal, spaces and operators included
//! a OR b                         a and b in the same group
//! a AND b, a b                   a and b in separate groups
//! ```

use crate::expression::{FilterElement, MatchKind, OrGroup, ParsedExpression};

/// Parse a search expression.
///
/// # Examples
///
/// ```
/// use sq_core::parse;
///
/// let expr = parse("artist:cure OR year:2009");
/// assert_eq!(expr.len(), 1);
/// assert_eq!(expr.groups()[0].len(), 2);
/// ```
pub fn parse(expression: &str) -> ParsedExpression {
    let mut parser = Parser::default();
    for c in expression.chars() {
        parser.feed(c);
    }
    parser.finish()
}

/// Returns true if the input uses any expression syntax.
///
/// This is a plain, case-insensitive substring test: `android` counts as
/// advanced because it contains `and`.
pub fn is_advanced_expression(expression: &str) -> bool {
    if expression.contains(['"', ':', '-']) {
        return true;
    }
    let upper = expression.to_uppercase();
    upper.contains("AND") || upper.contains("OR")
}

/// Tokenizer states, ordered. Within one element the state only increases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
enum State {
    #[default]
    ExpectMinus,
    ExpectField,
    ExpectMod,
    ExpectText,
}

/// Working state for a single `parse` call.
#[derive(Debug, Default)]
struct Parser {
    state: State,
    buffer: String,
    element: FilterElement,
    in_quote: bool,
    /// An explicit `OR` is joining the next element to the current group.
    in_or_run: bool,
    /// The previous token was a grouping keyword.
    after_keyword: bool,
    group: OrGroup,
    parsed: ParsedExpression,
}

impl Parser {
    fn feed(&mut self, c: char) {
        if self.in_quote && c != '"' {
            self.buffer.push(c);
            return;
        }

        match c {
            '"' => self.quote(),
            c if c.is_whitespace() => {
                if self.state > State::ExpectMinus {
                    self.finished_token();
                }
            }
            '-' if self.state == State::ExpectMinus => {
                self.element.negate = true;
                self.state = State::ExpectField;
            }
            ':' if self.state <= State::ExpectField && !self.buffer.is_empty() => {
                self.element.field = std::mem::take(&mut self.buffer);
                self.state = State::ExpectMod;
            }
            '=' | '<' | '>' if self.state == State::ExpectMod => {
                self.element.match_kind = MatchKind::from_symbol(c).unwrap_or_default();
                self.state = State::ExpectText;
            }
            c => self.push_char(c),
        }
    }

    fn quote(&mut self) {
        if self.in_quote {
            self.finished_element();
            self.in_quote = false;
        } else {
            if !self.buffer.is_empty() {
                self.finished_token();
            }
            self.state = State::ExpectText;
            self.in_quote = true;
        }
    }

    fn push_char(&mut self, c: char) {
        self.buffer.push(c);
        self.state = if self.state <= State::ExpectField {
            State::ExpectField
        } else {
            State::ExpectText
        };
    }

    /// A bare word ended: either a grouping keyword or an element value.
    fn finished_token(&mut self) {
        let keyword_allowed =
            !self.in_or_run && !self.after_keyword && self.element.field.is_empty();

        match self.buffer.as_str() {
            "AND" if keyword_allowed => {
                self.after_keyword = true;
                self.finished_or_group();
            }
            "OR" if keyword_allowed => {
                self.after_keyword = true;
                self.in_or_run = true;
            }
            _ => {
                self.finished_element();
                return;
            }
        }

        self.buffer.clear();
        self.state = State::ExpectMinus;
    }

    fn finished_element(&mut self) {
        if !self.in_or_run {
            self.finished_or_group();
        }
        self.in_or_run = false;
        self.after_keyword = false;

        let mut element = std::mem::take(&mut self.element);
        element.text = std::mem::take(&mut self.buffer);
        if !element.text.is_empty() {
            self.group.push(element);
        }
        self.state = State::ExpectMinus;
    }

    fn finished_or_group(&mut self) {
        if !self.group.is_empty() {
            self.parsed.push_group(std::mem::take(&mut self.group));
        }
        self.in_or_run = false;
    }

    fn finish(mut self) -> ParsedExpression {
        self.finished_token();
        self.finished_or_group();
        self.parsed
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

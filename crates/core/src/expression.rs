// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed search expression types.
//!
//! A search expression is an AND of OR-groups. Each group holds one or more
//! [`FilterElement`]s, for example `artist:cure OR album:"Best of"` is a
//! single group with two elements, while `artist:cure year:<1990` is two
//! singleton groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The comparison requested for an element's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Substring match (no operator).
    #[default]
    Contains,
    /// Exact match (`=`).
    Equals,
    /// Less than (`<`).
    LessThan,
    /// Greater than (`>`).
    GreaterThan,
}

impl MatchKind {
    /// Returns the operator character, or `None` for [`MatchKind::Contains`].
    pub fn symbol(self) -> Option<char> {
        match self {
            MatchKind::Contains => None,
            MatchKind::Equals => Some('='),
            MatchKind::LessThan => Some('<'),
            MatchKind::GreaterThan => Some('>'),
        }
    }

    /// Maps an operator character to a match kind.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '=' => Some(MatchKind::Equals),
            '<' => Some(MatchKind::LessThan),
            '>' => Some(MatchKind::GreaterThan),
            _ => None,
        }
    }
}

/// One atomic predicate of a search expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterElement {
    /// Field name as typed by the user. Empty means "search the default fields".
    pub field: String,
    /// The literal value. Never empty in parser output.
    pub text: String,
    /// True when the element was prefixed with `-`.
    pub negate: bool,
    /// The requested comparison.
    pub match_kind: MatchKind,
}

impl FilterElement {
    /// Creates an unqualified, non-negated `Contains` element.
    pub fn new(text: impl Into<String>) -> Self {
        FilterElement {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Sets the field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the match kind.
    pub fn with_match(mut self, match_kind: MatchKind) -> Self {
        self.match_kind = match_kind;
        self
    }

    /// Marks the element as negated.
    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Returns true if the element has no field qualifier.
    pub fn is_unqualified(&self) -> bool {
        self.field.is_empty()
    }
}

/// Elements combined with logical OR.
pub type OrGroup = Vec<FilterElement>;

/// A parsed search expression: the AND of its groups, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpression {
    groups: Vec<OrGroup>,
}

impl ParsedExpression {
    /// Creates an expression from already-built groups.
    ///
    /// Empty groups are discarded so the non-empty invariant holds.
    pub fn from_groups(groups: Vec<OrGroup>) -> Self {
        ParsedExpression {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    /// Returns true if the expression has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// The groups in input order.
    pub fn groups(&self) -> &[OrGroup] {
        &self.groups
    }

    /// Iterates over the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, OrGroup> {
        self.groups.iter()
    }

    /// Iterates over every element of every group.
    pub fn elements(&self) -> impl Iterator<Item = &FilterElement> {
        self.groups.iter().flatten()
    }

    pub(crate) fn push_group(&mut self, group: OrGroup) {
        self.groups.push(group);
    }
}

impl<'a> IntoIterator for &'a ParsedExpression {
    type Item = &'a OrGroup;
    type IntoIter = std::slice::Iter<'a, OrGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Characters that change tokenizer state and therefore force quoting.
const SPECIAL_CHARS: &[char] = &['"', ':', '-', '<', '>', '='];

fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text == "AND"
        || text == "OR"
        || text.chars().any(|c| c.is_whitespace() || SPECIAL_CHARS.contains(&c))
}

impl fmt::Display for FilterElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negate {
            f.write_str("-")?;
        }
        if !self.field.is_empty() {
            write!(f, "{}:", self.field)?;
        }
        if let Some(op) = self.match_kind.symbol() {
            write!(f, "{op}")?;
        }
        if needs_quotes(&self.text) {
            write!(f, "\"{}\"", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for (j, element) in group.iter().enumerate() {
                if j > 0 {
                    f.write_str(" OR ")?;
                }
                write!(f, "{element}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;

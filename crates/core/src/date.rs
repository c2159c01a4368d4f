// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of date values typed into date fields.
//!
//! Accepted forms, tried in order:
//!
//! ```text
//! today, last week, last month,    relative phrases (case-insensitive)
//! two months ago, three months ago
//! 12/25/90, 2024-01-15             configured short-date formats
//! 25.12.1990, 25-12-1990           day, month, year
//! 25.12                            day, month of the current year
//! 2w3d, 1y6m, 12h30M               elapsed time before now
//! ```
//!
//! Units for the shorthand are `y` years, `m` months, `w` weeks, `d` days,
//! `h` hours, `M` minutes and `s` seconds.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{Error, Result};

static LONG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(\d{1,2})[-.](\d{1,2})[-.](\d{4})") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });
static SHORT_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(\d{1,2})[-.](\d{1,2})") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Short-date formats used when none are configured.
pub const DEFAULT_SHORT_DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// The outcome of resolving a date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateResolution {
    /// Unix timestamp in seconds. Zero means no valid date.
    pub value: i64,
    /// True for calendar dates, false for offsets before now.
    ///
    /// Comparisons against relative values run the other way: "less than two
    /// weeks ago" means a timestamp *greater* than `now - 2w`.
    pub is_absolute: bool,
}

impl DateResolution {
    /// The "no valid date" sentinel.
    pub const INVALID: DateResolution = DateResolution {
        value: 0,
        is_absolute: false,
    };

    fn absolute(at: DateTime<Utc>) -> Self {
        DateResolution {
            value: at.timestamp(),
            is_absolute: true,
        }
    }

    fn relative(at: DateTime<Utc>) -> Self {
        DateResolution {
            value: at.timestamp(),
            is_absolute: false,
        }
    }

    /// Returns false for the zero sentinel.
    pub fn is_valid(&self) -> bool {
        self.value != 0
    }
}

/// Trait for getting the current time.
///
/// This allows injecting a fixed clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// Options controlling absolute date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptions {
    short_date_formats: Vec<String>,
}

impl Default for DateOptions {
    fn default() -> Self {
        DateOptions {
            short_date_formats: DEFAULT_SHORT_DATE_FORMATS
                .iter()
                .map(|f| f.to_string())
                .collect(),
        }
    }
}

impl DateOptions {
    /// Creates options with the given chrono date formats, tried in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateFormat`] if a format has a bad specifier.
    pub fn with_formats<I, S>(formats: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let short_date_formats: Vec<String> = formats.into_iter().map(Into::into).collect();
        for format in &short_date_formats {
            if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
                return Err(Error::InvalidDateFormat {
                    format: format.clone(),
                    reason: "unrecognized specifier".to_string(),
                });
            }
        }
        Ok(DateOptions { short_date_formats })
    }

    /// The configured short-date formats.
    pub fn short_date_formats(&self) -> &[String] {
        &self.short_date_formats
    }
}

/// Turns date text into a [`DateResolution`].
#[derive(Debug, Clone, Default)]
pub struct DateResolver<C: ClockSource = SystemClock> {
    clock: C,
    options: DateOptions,
}

impl DateResolver<SystemClock> {
    /// Creates a resolver on the system clock with default options.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DateOptions::default())
    }

    /// Creates a resolver on the system clock.
    pub fn with_options(options: DateOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: ClockSource> DateResolver<C> {
    /// Creates a resolver with a custom clock source.
    pub fn with_clock(clock: C, options: DateOptions) -> Self {
        DateResolver { clock, options }
    }

    /// Resolves `text`, returning [`DateResolution::INVALID`] if it is not a date.
    pub fn resolve(&self, text: &str) -> DateResolution {
        let Some(first) = text.chars().next() else {
            return DateResolution::INVALID;
        };
        let now = self.clock.now();

        if first.is_alphabetic() {
            return resolve_phrase(text, now).unwrap_or(DateResolution::INVALID);
        }

        if let Some(date) = self.parse_short_date(text) {
            return midnight(date).map_or(DateResolution::INVALID, DateResolution::absolute);
        }

        if let Some(caps) = LONG_DATE_RE.captures(text) {
            let date = ymd(&caps[3], &caps[2], &caps[1]);
            return date
                .and_then(midnight)
                .map_or(DateResolution::INVALID, DateResolution::absolute);
        }

        if let Some(caps) = SHORT_DATE_RE.captures(text) {
            let year = now.year().to_string();
            let date = ymd(&year, &caps[2], &caps[1]);
            return date
                .and_then(midnight)
                .map_or(DateResolution::INVALID, DateResolution::absolute);
        }

        resolve_shorthand(text, now).unwrap_or(DateResolution::INVALID)
    }

    fn parse_short_date(&self, text: &str) -> Option<NaiveDate> {
        self.options
            .short_date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Fixed English phrases. `today` resolves to one day ago.
fn resolve_phrase(text: &str, now: DateTime<Utc>) -> Option<DateResolution> {
    let at = match text.to_lowercase().as_str() {
        "today" => now.checked_sub_signed(Duration::days(1))?,
        "last week" => now.checked_sub_signed(Duration::days(7))?,
        "last month" => now.checked_sub_months(Months::new(1))?,
        "two months ago" => now.checked_sub_months(Months::new(2))?,
        "three months ago" => now.checked_sub_months(Months::new(3))?,
        _ => return None,
    };
    Some(DateResolution::relative(at))
}

/// Sums `<digits><unit>` pairs and subtracts them from `now`.
///
/// Characters other than digits and units are skipped without resetting the
/// pending number. Returns `None` if no unit was seen or on overflow.
fn resolve_shorthand(text: &str, now: DateTime<Utc>) -> Option<DateResolution> {
    let (mut years, mut months, mut days, mut secs) = (0i64, 0i64, 0i64, 0i64);
    let mut digits = String::new();
    let mut saw_unit = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let (slot, factor) = match c {
            'y' => (&mut years, 1),
            'm' => (&mut months, 1),
            'w' => (&mut days, 7),
            'd' => (&mut days, 1),
            'h' => (&mut secs, 60 * 60),
            'M' => (&mut secs, 60),
            's' => (&mut secs, 1),
            _ => continue,
        };
        let n: i64 = if digits.is_empty() { 0 } else { digits.parse().ok()? };
        *slot = slot.checked_add(n.checked_mul(factor)?)?;
        digits.clear();
        saw_unit = true;
    }

    if !saw_unit {
        return None;
    }

    let months_back = u32::try_from(years.checked_mul(12)?).ok()?;
    let at = now
        .checked_sub_months(Months::new(months_back))?
        .checked_sub_months(Months::new(u32::try_from(months).ok()?))?
        .checked_sub_signed(Duration::try_days(days)?)?
        .checked_sub_signed(Duration::try_seconds(secs)?)?;
    Some(DateResolution::relative(at))
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;

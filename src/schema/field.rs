// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field definitions for [`EnvSchema`](super::EnvSchema).
//!
//! ```text
//! Option<&str> --missing--> default | omitted (optional) | "Required"
//!      |
//!      +--present--> FieldKind::coerce --> checks --> Value
//!                      (first error stops)  (all errors collected)
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::value::Value;

pub(crate) const REQUIRED: &str = "Required";

/// Expected shape of a single environment variable.
#[derive(Debug, Clone)]
pub struct Field {
    kind: FieldKind,
    optional: bool,
    default: Option<Value>,
    checks: Vec<Check>,
}

#[derive(Debug, Clone)]
enum FieldKind {
    String,
    Number,
    Boolean,
    CoerceNumber,
    Flag,
    Date,
    Enum(Vec<String>),
    List(String),
    Json,
}

#[derive(Debug, Clone)]
enum Check {
    Int,
    Min(f64),
    Max(f64),
    MinLen(usize),
    MaxLen(usize),
    Pattern(Regex),
}

impl Field {
    const fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            optional: false,
            default: None,
            checks: Vec::new(),
        }
    }

    /// Any string, taken as-is.
    #[must_use]
    pub const fn string() -> Self {
        Self::of(FieldKind::String)
    }

    /// A number without coercion.
    ///
    /// Environment values are strings, so a present value always fails with
    /// `Expected number, received string`.
    #[must_use]
    pub const fn number() -> Self {
        Self::of(FieldKind::Number)
    }

    /// A boolean without coercion; present values always fail.
    #[must_use]
    pub const fn boolean() -> Self {
        Self::of(FieldKind::Boolean)
    }

    /// A number parsed from the string.
    ///
    /// Surrounding whitespace is ignored and an empty string is `0`.
    /// Decimal and exponent forms are accepted, as are unsigned `0x`, `0o`
    /// and `0b` literals. Infinite or overflowing values are rejected.
    #[must_use]
    pub const fn coerce_number() -> Self {
        Self::of(FieldKind::CoerceNumber)
    }

    /// A boolean parsed from `true/false`, `1/0`, `yes/no` or `on/off`.
    #[must_use]
    pub const fn flag() -> Self {
        Self::of(FieldKind::Flag)
    }

    /// A date, either `YYYY-MM-DD` (midnight UTC) or RFC 3339.
    #[must_use]
    pub const fn date() -> Self {
        Self::of(FieldKind::Date)
    }

    /// One of a fixed set of strings.
    #[must_use]
    pub fn enumeration<I, S>(variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::of(FieldKind::Enum(variants.into_iter().map(Into::into).collect()))
    }

    /// A list of strings split on `separator`; blank items are dropped.
    #[must_use]
    pub fn list(separator: impl Into<String>) -> Self {
        Self::of(FieldKind::List(separator.into()))
    }

    /// A JSON document, kept as a nested value.
    #[must_use]
    pub const fn json() -> Self {
        Self::of(FieldKind::Json)
    }

    /// Missing values are left out of the result instead of failing.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Value used when the variable is missing.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Numbers must be whole.
    #[must_use]
    pub fn int(mut self) -> Self {
        self.checks.push(Check::Int);
        self
    }

    /// Numbers must be at least `min`.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.checks.push(Check::Min(min));
        self
    }

    /// Numbers must be at most `max`.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.checks.push(Check::Max(max));
        self
    }

    /// Strings must have at least `len` characters.
    #[must_use]
    pub fn min_len(mut self, len: usize) -> Self {
        self.checks.push(Check::MinLen(len));
        self
    }

    /// Strings must have at most `len` characters.
    #[must_use]
    pub fn max_len(mut self, len: usize) -> Self {
        self.checks.push(Check::MaxLen(len));
        self
    }

    /// Strings must match `pattern`.
    #[must_use]
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.checks.push(Check::Pattern(pattern));
        self
    }

    /// Parses a raw variable.
    ///
    /// `Ok(None)` means the field is optional and absent.
    pub(crate) fn parse(&self, raw: Option<&str>) -> Result<Option<Value>, Vec<String>> {
        let Some(raw) = raw else {
            return match (&self.default, self.optional) {
                (Some(default), _) => Ok(Some(default.clone())),
                (None, true) => Ok(None),
                (None, false) => Err(vec![REQUIRED.to_owned()]),
            };
        };

        let value = self.kind.coerce(raw).map_err(|message| vec![message])?;
        let failures: Vec<String> = self
            .checks
            .iter()
            .filter_map(|check| check.apply(&value))
            .collect();
        if failures.is_empty() {
            Ok(Some(value))
        } else {
            Err(failures)
        }
    }
}

impl FieldKind {
    fn coerce(&self, raw: &str) -> Result<Value, String> {
        match self {
            Self::String => Ok(Value::from(raw)),
            Self::Number => Err("Expected number, received string".to_owned()),
            Self::Boolean => Err("Expected boolean, received string".to_owned()),
            Self::CoerceNumber => coerce_number(raw),
            Self::Flag => parse_flag(raw),
            Self::Date => parse_date(raw),
            Self::Enum(variants) => {
                if variants.iter().any(|variant| variant == raw) {
                    Ok(Value::from(raw))
                } else {
                    let expected: Vec<String> =
                        variants.iter().map(|variant| format!("'{variant}'")).collect();
                    Err(format!(
                        "Invalid enum value. Expected {}, received '{raw}'",
                        expected.join(" | ")
                    ))
                }
            }
            Self::List(separator) => Ok(Value::Array(
                raw.split(separator.as_str())
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(Value::from)
                    .collect(),
            )),
            Self::Json => serde_json::from_str::<serde_json::Value>(raw)
                .map(Value::from)
                .map_err(|_| "Invalid JSON".to_owned()),
        }
    }
}

impl Check {
    /// Returns the failure message, if any. Checks skip values of other types.
    fn apply(&self, value: &Value) -> Option<String> {
        match (self, value) {
            (Self::Int, Value::Number(n)) => {
                (n.fract() != 0.0 || !n.is_finite())
                    .then(|| "Expected integer, received float".to_owned())
            }
            (Self::Min(min), Value::Number(n)) => {
                (n < min).then(|| format!("Number must be greater than or equal to {min}"))
            }
            (Self::Max(max), Value::Number(n)) => {
                (n > max).then(|| format!("Number must be less than or equal to {max}"))
            }
            (Self::MinLen(len), Value::String(s)) => (s.chars().count() < *len)
                .then(|| format!("String must contain at least {len} character(s)")),
            (Self::MaxLen(len), Value::String(s)) => (s.chars().count() > *len)
                .then(|| format!("String must contain at most {len} character(s)")),
            (Self::Pattern(pattern), Value::String(s)) => {
                (!pattern.is_match(s)).then(|| "Invalid".to_owned())
            }
            _ => None,
        }
    }
}

fn coerce_number(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Number(0.0));
    }
    let parsed = parse_radix_literal(trimmed).or_else(|| {
        // `inf`, `infinity` and `nan` spellings are not numbers here
        trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
            .then(|| trimmed.parse::<f64>().ok())
            .flatten()
    });
    match parsed {
        Some(n) if n.is_finite() => Ok(Value::Number(n)),
        _ => Err("Expected number, received nan".to_owned()),
    }
}

/// Parses unsigned `0x`, `0o` and `0b` literals.
fn parse_radix_literal(raw: &str) -> Option<f64> {
    let radix = match raw.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

fn parse_flag(raw: &str) -> Result<Value, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Value::Bool(true)),
        "false" | "0" | "no" | "off" => Ok(Value::Bool(false)),
        _ => Err("Invalid boolean".to_owned()),
    }
}

fn parse_date(raw: &str) -> Result<Value, String> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Value::Date(date.and_time(NaiveTime::MIN).and_utc()));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|date| Value::Date(date.with_timezone(&Utc)))
        .map_err(|_| "Invalid date".to_owned())
}

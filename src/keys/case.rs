// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Naming conventions for environment keys.
//!
//! ```text
//! DATABASE_URL_TEST
//!   camelcase    -> databaseUrlTest
//!   pascalcase   -> DatabaseUrlTest
//!   kebabcase    -> database-url-test
//!   constantcase -> DATABASE_URL_TEST
//!   default      -> DATABASE_URL_TEST (unchanged)
//! ```
//!
//! Words are separated by `_`. Empty words (leading, trailing or repeated
//! separators) are dropped by every mode that re-joins words.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SEPARATOR;

/// Target naming convention for keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    CamelCase,
    PascalCase,
    KebabCase,
    ConstantCase,
    /// Keys are left as they are.
    #[default]
    #[serde(rename = "default")]
    Unchanged,
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CamelCase => write!(f, "camelcase"),
            Self::PascalCase => write!(f, "pascalcase"),
            Self::KebabCase => write!(f, "kebabcase"),
            Self::ConstantCase => write!(f, "constantcase"),
            Self::Unchanged => write!(f, "default"),
        }
    }
}

/// Unknown naming convention tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown naming convention '{0}', expected 'camelcase', 'pascalcase', 'kebabcase', 'constantcase', or 'default'"
)]
pub struct ParseCaseModeError(String);

impl std::str::FromStr for CaseMode {
    type Err = ParseCaseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camelcase" => Ok(Self::CamelCase),
            "pascalcase" => Ok(Self::PascalCase),
            "kebabcase" => Ok(Self::KebabCase),
            "constantcase" => Ok(Self::ConstantCase),
            "default" => Ok(Self::Unchanged),
            _ => Err(ParseCaseModeError(s.to_string())),
        }
    }
}

/// Converts a single underscore-delimited key to the given naming convention.
///
/// # Example
/// ```
/// use envtype::CaseMode;
/// use envtype::keys::case::convert;
///
/// assert_eq!(convert("DATABASE_URL_TEST", CaseMode::CamelCase), "databaseUrlTest");
/// assert_eq!(convert("DATABASE_URL_TEST", CaseMode::KebabCase), "database-url-test");
/// ```
#[must_use]
pub fn convert(key: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::CamelCase => join_capitalized(key, false),
        CaseMode::PascalCase => join_capitalized(key, true),
        CaseMode::KebabCase => lowercase_words(key).join("-"),
        CaseMode::ConstantCase => key.to_uppercase(),
        CaseMode::Unchanged => key.to_owned(),
    }
}

fn lowercase_words(key: &str) -> Vec<String> {
    key.to_lowercase()
        .split(SEPARATOR)
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn join_capitalized(key: &str, capitalize_first: bool) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, word) in lowercase_words(key).iter().enumerate() {
        if i == 0 && !capitalize_first {
            out.push_str(word);
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

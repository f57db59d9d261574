// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Key rewriting: prefix removal and naming conventions.
//!
//! ```text
//! VITE_DATABASE_URL
//!     | strip_prefix("VITE")      (prefix first)
//!     v
//! DATABASE_URL
//!     | case::convert(PascalCase) (rename second)
//!     v
//! DatabaseUrl
//! ```
//!
//! [`KeyRewriter`] composes both steps and applies them to every key of a
//! value tree through [`transform::transform_keys_owned`], without
//! copying the tree.

pub mod case;
pub mod transform;


use case::{CaseMode, convert};
use transform::{KeyCollision, transform_keys_owned};

use crate::value::Value;

/// Word separator in environment keys.
pub const SEPARATOR: char = '_';

/// Removes `prefix` from the start of `key`.
///
/// A prefix that does not end with `_` must be followed by one `_` in the key.
/// Keys without the prefix are returned unchanged.
///
/// # Example
/// ```
/// use envtype::keys::strip_prefix;
///
/// assert_eq!(strip_prefix("VITE_PORT", "VITE_"), "PORT");
/// assert_eq!(strip_prefix("VITE_PORT", "VITE"), "PORT");
/// assert_eq!(strip_prefix("PORT", "VITE_"), "PORT");
/// ```
#[must_use]
pub fn strip_prefix<'a>(key: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return key;
    }
    let stripped = if prefix.ends_with(SEPARATOR) {
        key.strip_prefix(prefix)
    } else {
        key.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(SEPARATOR))
    };
    stripped.unwrap_or(key)
}

/// Prefix removal followed by case conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRewriter {
    prefix: String,
    mode: CaseMode,
}

impl KeyRewriter {
    #[must_use]
    pub fn new(prefix: impl Into<String>, mode: CaseMode) -> Self {
        Self {
            prefix: prefix.into(),
            mode,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub const fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Whether this rewriter leaves every key unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.prefix.is_empty() && self.mode == CaseMode::Unchanged
    }

    /// Rewrites a single key.
    #[must_use]
    pub fn rewrite(&self, key: &str) -> String {
        convert(strip_prefix(key, &self.prefix), self.mode)
    }

    /// Rewrites every key of `value` at every depth.
    ///
    /// # Errors
    ///
    /// Returns [`KeyCollision`] if two keys of one object end up identical.
    pub fn apply(&self, value: Value) -> Result<Value, KeyCollision> {
        if self.is_identity() {
            return Ok(value);
        }
        transform_keys_owned(value, |key| self.rewrite(key))
    }
}

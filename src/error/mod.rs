// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                    EnvError (~24 bytes)
//!                           |
//!   +------------+----------+---------+------------+
//!   |            |          |         |            |
//!   v            v          v         v            v
//! Unavailable Validation  Custom  KeyCollision Deserialize
//!  Box<str>      Box      anyhow      Box       serde_json
//!
//! Validation carries the schema issues and the rendered message:
//!   Environment variable validation failed:
//!   \t'HOST': Expected number, received string,
//!   \t'PORT': Required
//! ```

use thiserror::Error;

use crate::keys::transform::KeyCollision;
use crate::schema::Issue;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Header of the default validation failure message.
pub const VALIDATION_HEADER: &str = "Environment variable validation failed:";

/// Top-level error type.
///
/// Large variants are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvError {
    /// No environment source could be resolved.
    #[error("failed to get environment: {0}")]
    Unavailable(Box<str>),

    /// The schema rejected the environment.
    #[error("{0}")]
    Validation(Box<ValidationError>),

    /// Error built by a caller-supplied constructor.
    #[error(transparent)]
    Custom(anyhow::Error),

    /// Two keys of one object were rewritten to the same key.
    #[error("{0}")]
    KeyCollision(Box<KeyCollision>),

    /// The loaded value did not match the requested type.
    #[error("failed to deserialize environment: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Create an [`EnvError::Unavailable`] for a missing environment source.
pub fn unavailable(reason: impl Into<String>) -> EnvError {
    EnvError::Unavailable(reason.into().into_boxed_str())
}

impl EnvError {
    /// Returns the schema issues when this is a validation failure.
    #[must_use]
    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            Self::Validation(err) => Some(err.issues()),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ValidationError => Validation,
    KeyCollision => KeyCollision,
}

// --- Validation Errors ---

/// Schema validation failure.
///
/// Displays as its message, which is either the default rendering of the
/// issues or the string produced by a caller's format hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    issues: Vec<Issue>,
    message: String,
}

impl ValidationError {
    /// Builds the error with the default message.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        let message = format_issues(&issues);
        Self { issues, message }
    }

    /// Builds the error with a caller-rendered message.
    #[must_use]
    pub const fn with_message(message: String, issues: Vec<Issue>) -> Self {
        Self { issues, message }
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Renders issues in the default format.
///
/// Each issue becomes `\n\t'<path>': <message>` with path segments joined by
/// `,`, and entries are separated by `,`.
///
/// # Example
/// ```
/// use envtype::Issue;
/// use envtype::error::format_issues;
///
/// let issues = vec![Issue::at_key("PORT", "Required")];
/// assert_eq!(
///     format_issues(&issues),
///     "Environment variable validation failed:\n\t'PORT': Required"
/// );
/// ```
#[must_use]
pub fn format_issues(issues: &[Issue]) -> String {
    let entries: Vec<String> = issues
        .iter()
        .map(|issue| format!("\n\t'{}': {}", issue.joined_path(), issue.message))
        .collect();
    format!("{VALIDATION_HEADER}{}", entries.join(","))
}

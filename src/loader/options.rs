// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loader options.
//!
//! ```text
//! LoadOptions::builder()
//!   .with_transform(CaseMode)        default: CaseMode::Unchanged
//!   .with_exclude_prefix("VITE")     default: "" (no stripping)
//!   .with_error_hook(ErrorHook)      default: built-in message
//!   .build()
//! ```

use bon::Builder;

use crate::error::{EnvError, ValidationError};
use crate::keys::KeyRewriter;
use crate::keys::case::CaseMode;
use crate::schema::Issue;

/// Renders issues into an error message.
pub type FormatErrorFn = dyn Fn(&[Issue]) -> String + Send + Sync;

/// Builds a caller-defined error from issues.
pub type ConstructErrorFn = dyn Fn(&[Issue]) -> anyhow::Error + Send + Sync;

/// Replacement for the default validation error.
pub enum ErrorHook {
    /// Keep [`EnvError::Validation`] but use this message.
    Format(Box<FormatErrorFn>),
    /// Raise [`EnvError::Custom`] with the constructed error.
    Construct(Box<ConstructErrorFn>),
}

impl ErrorHook {
    pub fn format<F>(f: F) -> Self
    where
        F: Fn(&[Issue]) -> String + Send + Sync + 'static,
    {
        Self::Format(Box::new(f))
    }

    pub fn construct<F>(f: F) -> Self
    where
        F: Fn(&[Issue]) -> anyhow::Error + Send + Sync + 'static,
    {
        Self::Construct(Box::new(f))
    }
}

impl std::fmt::Debug for ErrorHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(_) => f.write_str("ErrorHook::Format(..)"),
            Self::Construct(_) => f.write_str("ErrorHook::Construct(..)"),
        }
    }
}

/// Options for a single environment load.
#[derive(Debug, Default, Builder)]
pub struct LoadOptions {
    #[builder(setters(name = with_transform), default)]
    transform: CaseMode,
    #[builder(setters(name = with_exclude_prefix), into, default)]
    exclude_prefix: String,
    #[builder(setters(name = with_error_hook))]
    error_hook: Option<ErrorHook>,
}

impl LoadOptions {
    /// Get the target naming convention.
    #[must_use]
    pub const fn transform(&self) -> CaseMode {
        self.transform
    }

    /// Get the prefix removed from keys, empty when disabled.
    #[must_use]
    pub fn exclude_prefix(&self) -> &str {
        &self.exclude_prefix
    }

    #[must_use]
    pub const fn error_hook(&self) -> Option<&ErrorHook> {
        self.error_hook.as_ref()
    }

    /// Key rewriter for these options.
    #[must_use]
    pub fn rewriter(&self) -> KeyRewriter {
        KeyRewriter::new(self.exclude_prefix.clone(), self.transform)
    }

    /// Turns schema issues into the error surfaced to the caller.
    #[must_use]
    pub fn validation_error(&self, issues: Vec<Issue>) -> EnvError {
        match &self.error_hook {
            Some(ErrorHook::Construct(construct)) => EnvError::Custom(construct(&issues)),
            Some(ErrorHook::Format(format)) => {
                ValidationError::with_message(format(&issues), issues).into()
            }
            None => ValidationError::new(issues).into(),
        }
    }
}

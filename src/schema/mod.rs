// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema validation.
//!
//! # Architecture
//!
//! ```text
//! RawEnv --Schema::parse--> Ok(Value)
//!                      \--> Err(Vec<Issue>)   order kept as reported
//!
//! Implementations:
//!   EnvSchema                       built-in fields (string, coerce_number, ...)
//!   Fn(&RawEnv) -> Result<..>       any caller validator
//! ```

pub mod field;
pub mod issue;
pub mod object;


pub use field::Field;
pub use issue::{Issue, PathSegment};
pub use object::EnvSchema;
pub use regex::Regex;

use tracing::debug;

use crate::env::RawEnv;
use crate::value::Value;

/// Validates a raw environment into a typed value.
pub trait Schema {
    /// Parses `env`, returning every issue found on failure.
    ///
    /// # Errors
    ///
    /// Returns the list of issues when `env` does not satisfy the schema.
    fn parse(&self, env: &RawEnv) -> Result<Value, Vec<Issue>>;
}

impl<F> Schema for F
where
    F: Fn(&RawEnv) -> Result<Value, Vec<Issue>>,
{
    fn parse(&self, env: &RawEnv) -> Result<Value, Vec<Issue>> {
        self(env)
    }
}

/// Runs `schema` against `env`.
///
/// The result is passed through untouched: issues are neither reordered
/// nor merged.
///
/// # Errors
///
/// Returns the schema's issues when validation fails.
pub fn validate<S>(schema: &S, env: &RawEnv) -> Result<Value, Vec<Issue>>
where
    S: Schema + ?Sized,
{
    let result = schema.parse(env);
    match &result {
        Ok(_) => debug!("environment passed schema validation"),
        Err(issues) => debug!(
            issues = issues.len(),
            "environment failed schema validation"
        ),
    }
    result
}

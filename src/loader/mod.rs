// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! override RawEnv | EnvProvider::snapshot()     --> Unavailable
//!        |
//!        v
//! schema::validate(schema, env)                 --> Validation / Custom
//!        |
//!        v
//! KeyRewriter: strip prefix, then convert case  --> KeyCollision
//!        |
//!        v
//!      Value  (load_as: serde_json -> T)        --> Deserialize
//! ```
//!
//! The order is fixed. Nothing is written back to the environment.

pub mod options;

#[cfg(test)]
mod tests;

pub use options::{ErrorHook, LoadOptions};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::env::{EnvProvider, ProcessEnv, RawEnv};
use crate::error::EnvResult;
use crate::schema::{Schema, validate};
use crate::value::Value;

/// Validates and rewrites the environment.
///
/// Uses `override_env` when given, otherwise a snapshot of the process
/// environment.
///
/// # Errors
///
/// Returns an error if:
/// - The environment cannot be read.
/// - The schema rejects the environment (message per [`LoadOptions`]).
/// - Two keys collapse onto one after prefix removal and renaming.
pub fn type_environment<S>(
    schema: &S,
    options: &LoadOptions,
    override_env: Option<&RawEnv>,
) -> EnvResult<Value>
where
    S: Schema + ?Sized,
{
    match override_env {
        Some(env) => load_from(schema, options, env),
        None => load(schema, options, &ProcessEnv),
    }
}

/// Like [`type_environment`], reading from any [`EnvProvider`].
///
/// # Errors
///
/// Same as [`type_environment`], plus any error returned by the provider.
pub fn load<S, P>(schema: &S, options: &LoadOptions, provider: &P) -> EnvResult<Value>
where
    S: Schema + ?Sized,
    P: EnvProvider + ?Sized,
{
    let env = provider.snapshot()?;
    load_from(schema, options, &env)
}

/// Loads the environment and deserializes it into `T`.
///
/// # Errors
///
/// Same as [`type_environment`], plus [`crate::EnvError::Deserialize`] if the
/// value does not fit `T`.
pub fn load_as<T, S>(
    schema: &S,
    options: &LoadOptions,
    override_env: Option<&RawEnv>,
) -> EnvResult<T>
where
    T: DeserializeOwned,
    S: Schema + ?Sized,
{
    let value = type_environment(schema, options, override_env)?;
    Ok(value.deserialize_into()?)
}

fn load_from<S>(schema: &S, options: &LoadOptions, env: &RawEnv) -> EnvResult<Value>
where
    S: Schema + ?Sized,
{
    debug!(
        vars = env.len(),
        transform = %options.transform(),
        prefix = options.exclude_prefix(),
        "loading environment"
    );
    let parsed = validate(schema, env).map_err(|issues| options.validation_error(issues))?;
    Ok(options.rewriter().apply(parsed)?)
}

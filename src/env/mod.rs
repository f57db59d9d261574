// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment sources.
//!
//! # Architecture
//!
//! ```text
//! EnvProvider::snapshot() -> RawEnv
//!   RawEnv       explicit override (cloned)
//!   ProcessEnv   std::env::vars_os(), non-unicode entries skipped
//!   Fn() -> ..   caller-supplied source
//! ```
//!
//! A snapshot is taken once per load and never written back to the process.

pub mod container;


pub use container::RawEnv;

use tracing::warn;

use crate::error::EnvResult;

/// Source of a [`RawEnv`] snapshot.
pub trait EnvProvider {
    /// Takes a snapshot of the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnvError::Unavailable`] if no environment can be read.
    fn snapshot(&self) -> EnvResult<RawEnv>;
}

impl EnvProvider for RawEnv {
    fn snapshot(&self) -> EnvResult<RawEnv> {
        Ok(self.clone())
    }
}

impl<F> EnvProvider for F
where
    F: Fn() -> EnvResult<RawEnv>,
{
    fn snapshot(&self) -> EnvResult<RawEnv> {
        self()
    }
}

/// The host process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn snapshot(&self) -> EnvResult<RawEnv> {
        Ok(current_env())
    }
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid unicode are skipped.
#[must_use]
pub fn current_env() -> RawEnv {
    let mut env = RawEnv::new();
    for (key, value) in std::env::vars_os() {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => {
                env.set(key, value);
            }
            (key, _) => warn!(?key, "skipping environment variable that is not valid unicode"),
        }
    }
    env
}

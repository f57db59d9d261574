// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw environment snapshot.
//!
//! ```text
//! RawEnv: BTreeMap<String, Option<String>>
//!   Some(value) -> variable is set
//!   None        -> variable is declared but undefined (same as missing)
//! ```

use std::collections::BTreeMap;

/// A snapshot of environment variables as plain strings.
///
/// Keys are compared exactly (case-sensitive). Entries without a value are
/// treated as missing by [`RawEnv::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnv {
    vars: BTreeMap<String, Option<String>>,
}

impl RawEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }

    /// Sets an environment variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), Some(value.into()));
        self
    }

    /// Declares a variable without a value.
    pub fn unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), None);
        self
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(key);
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(Option::as_deref)
    }

    /// Whether `key` has a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries, including undefined ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Returns the defined variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for RawEnv {
    fn from(vars: [(K, V); N]) -> Self {
        vars.into_iter().collect()
    }
}

// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Object schema over a flat environment.

use indexmap::IndexMap;

use super::field::Field;
use super::{Issue, Schema};
use crate::env::RawEnv;
use crate::value::{Map, Value};

/// Ordered set of named fields.
///
/// Parsing produces an object with one entry per present (or defaulted)
/// field, in declaration order. Variables not declared here are ignored.
#[derive(Debug, Clone, Default)]
pub struct EnvSchema {
    fields: IndexMap<String, Field>,
}

impl EnvSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Redeclaring a name replaces the field in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Declared field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Schema for EnvSchema {
    fn parse(&self, env: &RawEnv) -> Result<Value, Vec<Issue>> {
        let mut out = Map::with_capacity(self.fields.len());
        let mut issues = Vec::new();

        for (name, field) in &self.fields {
            match field.parse(env.get(name)) {
                Ok(Some(value)) => {
                    out.insert(name.clone(), value);
                }
                Ok(None) => {}
                Err(messages) => issues.extend(
                    messages
                        .into_iter()
                        .map(|message| Issue::at_key(name.as_str(), message)),
                ),
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(out))
        } else {
            Err(issues)
        }
    }
}

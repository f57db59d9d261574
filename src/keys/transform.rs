// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recursive key renaming over a [`Value`] tree.
//!
//! ```text
//! Object -> rename each key, recurse into each value
//! Array  -> recurse into each element, order kept
//! scalar -> cloned as-is
//! ```

use thiserror::Error;
use tracing::trace;

use crate::value::{Map, Value};

/// Two keys of the same object renamed to one key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keys '{first}' and '{second}' both map to '{key}'")]
pub struct KeyCollision {
    /// The shared key after renaming.
    pub key: String,
    /// Original key that claimed `key` first.
    pub first: String,
    /// Original key that collided with it.
    pub second: String,
}

/// Builds a new tree with every object key passed through `rename`.
///
/// The input is not modified. Scalars are never inspected.
///
/// # Errors
///
/// Returns [`KeyCollision`] if two keys of one object rename to the same key.
///
/// # Example
/// ```
/// use envtype::Value;
/// use envtype::keys::transform::deep_transform_keys;
///
/// let value: Value = [("A_B", Value::from(1))].into_iter().collect();
/// let renamed = deep_transform_keys(&value, str::to_lowercase)?;
/// assert_eq!(renamed.get("a_b"), Some(&Value::from(1)));
/// # Ok::<(), envtype::keys::transform::KeyCollision>(())
/// ```
pub fn deep_transform_keys<F>(value: &Value, rename: F) -> Result<Value, KeyCollision>
where
    F: Fn(&str) -> String,
{
    transform(value.clone(), &rename)
}

/// Like [`deep_transform_keys`], reusing the nodes of an owned tree.
///
/// # Errors
///
/// Returns [`KeyCollision`] if two keys of one object rename to the same key.
pub fn transform_keys_owned<F>(value: Value, rename: F) -> Result<Value, KeyCollision>
where
    F: Fn(&str) -> String,
{
    transform(value, &rename)
}

fn transform<F>(value: Value, rename: &F) -> Result<Value, KeyCollision>
where
    F: Fn(&str) -> String,
{
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| transform(item, rename))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Object(map) => transform_object(map, rename).map(Value::Object),
        scalar => Ok(scalar),
    }
}

fn transform_object<F>(map: Map, rename: &F) -> Result<Map, KeyCollision>
where
    F: Fn(&str) -> String,
{
    let mut out = Map::with_capacity(map.len());
    // original keys, index-for-index with `out`
    let mut originals: Vec<String> = Vec::with_capacity(map.len());
    for (key, child) in map {
        let renamed = rename(&key);
        if let Some(index) = out.get_index_of(&renamed) {
            return Err(KeyCollision {
                key: renamed,
                first: originals.swap_remove(index),
                second: key,
            });
        }
        trace!(from = %key, to = %renamed, "renamed key");
        out.insert(renamed, transform(child, rename)?);
        originals.push(key);
    }
    Ok(out)
}

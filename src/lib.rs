// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                    type_environment / load / load_as
//!                                  |
//!              ,-------------------+-------------------,
//!              |                loader                 |
//!              |  resolve env -> validate -> rewrite   |
//!              '----+--------------+--------------+----'
//!                   |              |              |
//!                   v              v              v
//!                  env          schema           keys
//!            RawEnv, process  Schema trait   strip_prefix, case,
//!              snapshot       EnvSchema      deep_transform_keys
//!                                  |              |
//!                                  +------+-------+
//!                                         v
//!   +-----------------------------------------+
//!   |  foundation   value, error              |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use envtype::{CaseMode, EnvSchema, Field, LoadOptions, RawEnv, type_environment};
//!
//! let schema = EnvSchema::new()
//!     .field("VITE_PORT", Field::coerce_number().int())
//!     .field("VITE_DATABASE_URL", Field::string());
//! let env = RawEnv::from([
//!     ("VITE_PORT", "4000"),
//!     ("VITE_DATABASE_URL", "postgres://localhost:5432/test"),
//! ]);
//! let options = LoadOptions::builder()
//!     .with_transform(CaseMode::CamelCase)
//!     .with_exclude_prefix("VITE")
//!     .build();
//!
//! let value = type_environment(&schema, &options, Some(&env))?;
//! assert_eq!(value.get("port").and_then(|v| v.as_f64()), Some(4000.0));
//! assert_eq!(
//!     value.get("databaseUrl").and_then(|v| v.as_str()),
//!     Some("postgres://localhost:5432/test")
//! );
//! # Ok::<(), envtype::EnvError>(())
//! ```

pub mod env;
pub mod error;
pub mod keys;
pub mod loader;
pub mod schema;
pub mod value;

pub use env::{EnvProvider, ProcessEnv, RawEnv, current_env};
pub use error::{EnvError, EnvResult, ValidationError};
pub use keys::case::CaseMode;
pub use loader::{ErrorHook, LoadOptions, load, load_as, type_environment};
pub use schema::{EnvSchema, Field, Issue, PathSegment, Schema};
pub use value::Value;

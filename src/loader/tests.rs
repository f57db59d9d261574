// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the loader pipeline.

use super::{ErrorHook, LoadOptions, load, load_as, type_environment};
use crate::env::RawEnv;
use crate::error::{EnvError, EnvResult, unavailable};
use crate::keys::case::CaseMode;
use crate::schema::{EnvSchema, Field, Issue};
use crate::value::Value;

fn sample_env() -> RawEnv {
    RawEnv::from([
        ("APP_HOST", "localhost"),
        ("APP_PORT", "3000"),
        ("APP_POOL", r#"{"MAX_SIZE": 4, "IDLE_SECS": [1, 2]}"#),
    ])
}

fn sample_schema() -> EnvSchema {
    EnvSchema::new()
        .field("APP_HOST", Field::string())
        .field("APP_PORT", Field::coerce_number().int())
        .field("APP_POOL", Field::json())
}

#[test]
fn test_options_defaults() {
    let options = LoadOptions::default();
    assert_eq!(options.transform(), CaseMode::Unchanged);
    assert_eq!(options.exclude_prefix(), "");
    assert!(options.error_hook().is_none());
    assert!(options.rewriter().is_identity());

    let built = LoadOptions::builder().build();
    assert_eq!(built.transform(), CaseMode::Unchanged);
    assert_eq!(built.exclude_prefix(), "");
}

#[test]
fn test_options_builder_setters() {
    let options = LoadOptions::builder()
        .with_transform(CaseMode::KebabCase)
        .with_exclude_prefix("APP")
        .with_error_hook(ErrorHook::format(|_| "nope".to_string()))
        .build();
    assert_eq!(options.transform(), CaseMode::KebabCase);
    assert_eq!(options.exclude_prefix(), "APP");
    insta::assert_snapshot!(format!("{:?}", options.error_hook()), @"Some(ErrorHook::Format(..))");
}

#[test]
fn test_load_without_options_keeps_keys() {
    let value =
        type_environment(&sample_schema(), &LoadOptions::default(), Some(&sample_env())).unwrap();
    assert_eq!(value.get("APP_HOST"), Some(&Value::from("localhost")));
    assert_eq!(value.get("APP_PORT"), Some(&Value::Number(3000.0)));
    assert!(value.get("APP_POOL").and_then(|pool| pool.get("MAX_SIZE")).is_some());
}

#[test]
fn test_load_strips_and_renames_nested_keys() {
    let options = LoadOptions::builder()
        .with_transform(CaseMode::CamelCase)
        .with_exclude_prefix("APP_")
        .build();
    let value = type_environment(&sample_schema(), &options, Some(&sample_env())).unwrap();

    insta::assert_snapshot!(
        serde_json::to_string(&value).unwrap(),
        @r#"{"host":"localhost","port":3000,"pool":{"maxSize":4,"idleSecs":[1,2]}}"#
    );
}

#[test]
fn test_default_error_message() {
    let schema = EnvSchema::new()
        .field("APP_PORT", Field::number())
        .field("APP_MISSING", Field::string());
    let err = type_environment(&schema, &LoadOptions::default(), Some(&sample_env())).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Environment variable validation failed:\n\t'APP_PORT': Expected number, received string,\n\t'APP_MISSING': Required"
    );
    assert_eq!(err.issues().map(<[Issue]>::len), Some(2));
}

#[test]
fn test_format_hook_replaces_message() {
    let options = LoadOptions::builder()
        .with_error_hook(ErrorHook::format(|issues| {
            issues
                .iter()
                .map(|issue| issue.joined_path())
                .collect::<Vec<_>>()
                .join("+")
        }))
        .build();
    let schema = EnvSchema::new()
        .field("A", Field::string())
        .field("B", Field::string());
    let err = type_environment(&schema, &options, Some(&RawEnv::new())).unwrap_err();

    assert_eq!(err.to_string(), "A+B");
    assert!(matches!(err, EnvError::Validation(_)));
    assert_eq!(err.issues().map(<[Issue]>::len), Some(2));
}

#[test]
fn test_construct_hook_raises_custom_error() {
    #[derive(Debug, thiserror::Error)]
    #[error("{count} bad variables")]
    struct BadEnv {
        count: usize,
    }

    let options = LoadOptions::builder()
        .with_error_hook(ErrorHook::construct(|issues| {
            BadEnv {
                count: issues.len(),
            }
            .into()
        }))
        .build();
    let schema = EnvSchema::new().field("A", Field::string());
    let err = type_environment(&schema, &options, Some(&RawEnv::new())).unwrap_err();

    let custom = match err {
        EnvError::Custom(custom) => custom,
        other => panic!("expected a custom error, got {other:?}"),
    };
    assert_eq!(custom.downcast_ref::<BadEnv>().map(|e| e.count), Some(1));
}

#[test]
fn test_validation_failure_skips_rewrite() {
    // Validation fails before keys are touched, so no collision is reported.
    let schema = EnvSchema::new()
        .field("VITE_PORT", Field::string())
        .field("PORT", Field::string());
    let options = LoadOptions::builder().with_exclude_prefix("VITE").build();
    let err = type_environment(&schema, &options, Some(&RawEnv::new())).unwrap_err();
    assert!(matches!(err, EnvError::Validation(_)));
}

#[test]
fn test_key_collision_is_an_error() {
    let schema = EnvSchema::new()
        .field("VITE_PORT", Field::string())
        .field("PORT", Field::string());
    let env = RawEnv::from([("VITE_PORT", "1"), ("PORT", "2")]);
    let options = LoadOptions::builder().with_exclude_prefix("VITE").build();

    let err = type_environment(&schema, &options, Some(&env)).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"keys 'VITE_PORT' and 'PORT' both map to 'PORT'");
}

#[test]
fn test_case_collision_is_an_error() {
    let schema = EnvSchema::new()
        .field("API_KEY", Field::string())
        .field("API__KEY", Field::string());
    let env = RawEnv::from([("API_KEY", "1"), ("API__KEY", "2")]);
    let options = LoadOptions::builder()
        .with_transform(CaseMode::CamelCase)
        .build();

    let err = type_environment(&schema, &options, Some(&env)).unwrap_err();
    assert!(matches!(err, EnvError::KeyCollision(_)));
}

#[test]
fn test_load_from_provider() {
    let provider = || -> EnvResult<RawEnv> { Ok(RawEnv::from([("HOST", "provided")])) };
    let schema = EnvSchema::new().field("HOST", Field::string());
    let value = load(&schema, &LoadOptions::default(), &provider).unwrap();
    assert_eq!(value.get("HOST"), Some(&Value::from("provided")));
}

#[test]
fn test_unavailable_provider_stops_before_validation() {
    let provider = || -> EnvResult<RawEnv> { Err(unavailable("sandboxed")) };
    let schema = |_: &RawEnv| -> Result<Value, Vec<Issue>> {
        panic!("schema must not run without an environment")
    };
    let err = load(&schema, &LoadOptions::default(), &provider).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"failed to get environment: sandboxed");
}

#[test]
fn test_load_as_typed_struct() {
    #[derive(Debug, serde::Deserialize)]
    struct Pool {
        #[serde(rename = "maxSize")]
        max_size: u32,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Settings {
        host: String,
        port: u16,
        pool: Pool,
    }

    let options = LoadOptions::builder()
        .with_transform(CaseMode::CamelCase)
        .with_exclude_prefix("APP")
        .build();
    let settings: Settings = load_as(&sample_schema(), &options, Some(&sample_env())).unwrap();
    assert_eq!(settings.host, "localhost");
    assert_eq!(settings.port, 3000);
    assert_eq!(settings.pool.max_size, 4);
}

#[test]
fn test_load_as_type_mismatch() {
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Settings {
        #[serde(rename = "APP_HOST")]
        host: u16,
    }

    let err = load_as::<Settings, _>(&sample_schema(), &LoadOptions::default(), Some(&sample_env()))
        .unwrap_err();
    assert!(matches!(err, EnvError::Deserialize(_)));
}

// envtype: Typed Environment Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Map, Value};
use chrono::{TimeZone, Utc};
use serde::Deserialize;

#[test]
fn test_value_serializes_dates_and_integers() {
    let birthday = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
    let value: Value = [
        ("PORT", Value::Number(3000.0)),
        ("RATIO", Value::Number(0.5)),
        ("BIRTHDAY", Value::Date(birthday)),
        ("DEBUG", Value::Bool(false)),
        ("MISSING", Value::Null),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(
        serde_json::to_string(&value).unwrap(),
        @r#"{"PORT":3000,"RATIO":0.5,"BIRTHDAY":"1990-01-01T00:00:00.000Z","DEBUG":false,"MISSING":null}"#
    );
}

#[test]
fn test_value_from_json_keeps_key_order() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": [true, "x"], "mid": {"b": null, "a": 2}}"#)
            .unwrap();
    let value = Value::from(json);

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);

    let alpha = value.get("alpha").and_then(Value::as_array).unwrap();
    assert_eq!(alpha, [Value::Bool(true), Value::from("x")]);

    let mid = value.get("mid").unwrap();
    assert_eq!(mid.get("b"), Some(&Value::Null));
    assert_eq!(mid.get("a").and_then(Value::as_f64), Some(2.0));
}

#[test]
fn test_value_accessors_reject_other_types() {
    let value = Value::from("text");
    assert_eq!(value.as_str(), Some("text"));
    assert!(value.as_f64().is_none());
    assert!(value.as_bool().is_none());
    assert!(value.as_date().is_none());
    assert!(value.as_array().is_none());
    assert!(value.get("anything").is_none());
    assert!(value.is_scalar());
    assert!(!Value::Object(Map::new()).is_scalar());
    assert!(!Value::Array(Vec::new()).is_scalar());
}

#[test]
fn test_value_type_names() {
    let names: Vec<&str> = [
        Value::Null,
        Value::Bool(true),
        Value::Number(1.0),
        Value::from("s"),
        Value::Date(Utc::now()),
        Value::Array(Vec::new()),
        Value::Object(Map::new()),
    ]
    .iter()
    .map(Value::type_name)
    .collect();
    assert_eq!(
        names,
        ["null", "boolean", "number", "string", "date", "array", "object"]
    );
}

#[test]
fn test_value_deserialize_into_struct() {
    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Settings {
        port: u16,
        database_url: String,
        hosts: Vec<String>,
    }

    let value: Value = [
        ("port", Value::Number(4000.0)),
        ("databaseUrl", Value::from("postgres://localhost:5432/test")),
        (
            "hosts",
            Value::Array(vec![Value::from("a"), Value::from("b")]),
        ),
    ]
    .into_iter()
    .collect();

    let settings: Settings = value.deserialize_into().unwrap();
    assert_eq!(
        settings,
        Settings {
            port: 4000,
            database_url: "postgres://localhost:5432/test".to_string(),
            hosts: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn test_value_deserialize_into_type_mismatch() {
    let value: Value = [("port", Value::from("not a number"))].into_iter().collect();

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Settings {
        port: u16,
    }

    assert!(value.deserialize_into::<Settings>().is_err());
}

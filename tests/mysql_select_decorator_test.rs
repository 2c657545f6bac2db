//! Integration tests for MySQL SELECT rendering
//!
//! Covers pagination with and without the limit sentinel, bound value
//! pass-through, scalar subquery placeholder naming and configuration-driven
//! rendering through the `SqlDecor` facade.

use serde_json::json;
use sqldecor::prelude::*;
use std::io::Write;

fn count_select(table: &str, limit: u64, offset: u64) -> Select {
    Select::from(table)
        .column_as("cnt", ColumnExpr::expression(format!("count({}.id)", table)))
        .limit(limit)
        .offset(offset)
}

fn bound(prepared: &PreparedStatement) -> Vec<(String, Value)> {
    prepared
        .parameters
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[test]
fn test_limit_offset_prepare_and_literal() {
    let decor = SqlDecor::mysql();
    let select = Select::from("foo").limit(5).offset(10);

    let prepared = decor.prepare(&select).unwrap();
    assert_eq!(prepared.sql, "SELECT `foo`.* FROM `foo` LIMIT ? OFFSET ?");
    assert_eq!(
        bound(&prepared),
        vec![("limit".to_string(), json!(5)), ("offset".to_string(), json!(10))]
    );

    assert_eq!(
        decor.sql_string(&select).unwrap(),
        "SELECT `foo`.* FROM `foo` LIMIT 5 OFFSET 10"
    );
}

#[test]
fn test_offset_without_limit() {
    let decor = SqlDecor::mysql();
    let select = Select::from("foo").offset(10);

    let prepared = decor.prepare(&select).unwrap();
    assert_eq!(
        prepared.sql,
        "SELECT `foo`.* FROM `foo` LIMIT 18446744073709551615 OFFSET ?"
    );
    assert_eq!(bound(&prepared), vec![("offset".to_string(), json!(10))]);

    assert_eq!(
        decor.sql_string(&select).unwrap(),
        "SELECT `foo`.* FROM `foo` LIMIT 18446744073709551615 OFFSET 10"
    );
}

#[test]
fn test_unsigned_64_bit_json_bounds() {
    let decor = SqlDecor::mysql();
    let select = Select::from_json(json!({
        "table": { "name": "foo" },
        "offset": 10000000000000000000u64
    }))
    .unwrap();

    let prepared = decor.prepare(&select).unwrap();
    assert_eq!(
        prepared.sql,
        "SELECT `foo`.* FROM `foo` LIMIT 18446744073709551615 OFFSET ?"
    );
    assert_eq!(
        bound(&prepared),
        vec![("offset".to_string(), json!(10000000000000000000u64))]
    );
    assert_eq!(
        decor.sql_string(&select).unwrap(),
        "SELECT `foo`.* FROM `foo` LIMIT 18446744073709551615 OFFSET 10000000000000000000"
    );

    let select = Select::from("foo").limit(u64::MAX).offset(u64::MAX);
    assert_eq!(
        decor.sql_string(&select).unwrap(),
        "SELECT `foo`.* FROM `foo` LIMIT 18446744073709551615 OFFSET 18446744073709551615"
    );
}

#[test]
fn test_negative_integer_bound_is_rejected() {
    assert!(matches!(
        PageBound::try_from(-5i64),
        Err(SqlError::InvalidBound(value)) if value == "-5"
    ));

    let result = Select::from_json(json!({ "table": { "name": "foo" }, "limit": -5 }));
    assert!(matches!(result, Err(SqlError::Deserialization(_))));
}

#[test]
fn test_string_bounds_pass_through() {
    let decor = SqlDecor::mysql();
    let select = Select::from("foo").limit("5").offset("10000000000000000000");

    let prepared = decor.prepare(&select).unwrap();
    assert_eq!(prepared.sql, "SELECT `foo`.* FROM `foo` LIMIT ? OFFSET ?");
    assert_eq!(prepared.parameters.get("limit"), Some(&json!("5")));
    assert_eq!(
        prepared.parameters.get("offset"),
        Some(&json!("10000000000000000000"))
    );

    assert_eq!(
        decor.sql_string(&select).unwrap(),
        "SELECT `foo`.* FROM `foo` LIMIT 5 OFFSET 10000000000000000000"
    );
}

#[test]
fn test_two_subselects_bind_in_textual_order() {
    let decor = SqlDecor::mysql();
    let select = Select::from("foo")
        .column_as("res", count_select("foo1", 100, 500))
        .column_as("res0", count_select("foo2", 50, 101))
        .limit(10)
        .offset(5);

    let prepared = decor.prepare(&select).unwrap();
    let names: Vec<&str> = prepared.parameters.names().collect();
    assert_eq!(
        names,
        vec![
            "subselect1limit",
            "subselect1offset",
            "subselect2limit",
            "subselect2offset",
            "limit",
            "offset",
        ]
    );
    assert_eq!(prepared.sql.matches('?').count(), prepared.parameters.len());
}

#[test]
fn test_json_tree_end_to_end() {
    let select = Select::from_json(json!({
        "table": { "name": "foo" },
        "columns": [
            {
                "alias": "res",
                "expr": {
                    "kind": "select",
                    "value": {
                        "table": { "name": "foo1" },
                        "columns": [
                            { "alias": "cnt", "expr": { "kind": "expression", "value": "count(foo1.id)" } }
                        ],
                        "limit": 100,
                        "offset": 500
                    }
                }
            }
        ],
        "limit": 10,
        "offset": 50
    }))
    .unwrap();

    let prepared = SqlDecor::mysql().prepare(&select).unwrap();
    assert_eq!(
        prepared.sql,
        "SELECT (SELECT count(foo1.id) AS `cnt` FROM `foo1` LIMIT ? OFFSET ?) AS `res` FROM `foo` LIMIT ? OFFSET ?"
    );
    assert_eq!(
        serde_json::to_value(&prepared.parameters).unwrap(),
        json!({ "subselect1limit": 100, "subselect1offset": 500, "limit": 10, "offset": 50 })
    );
}

#[test]
fn test_unsupported_expression_kind_is_rejected() {
    let select = Select::from_json(json!({
        "table": { "name": "foo" },
        "columns": [
            { "alias": "r", "expr": { "kind": "window_function", "value": "rank() over ()" } }
        ],
        "limit": 1
    }))
    .unwrap();

    let decor = SqlDecor::mysql();
    assert!(matches!(
        decor.prepare(&select),
        Err(SqlDecorError::Render(SqlError::UnsupportedExpression(_)))
    ));
    assert!(matches!(
        decor.sql_string(&select),
        Err(SqlDecorError::Render(SqlError::UnsupportedExpression(_)))
    ));
}

#[test]
fn test_render_does_not_mutate_tree() {
    let select = Select::from("foo")
        .column_as("res", count_select("foo1", 100, 500))
        .offset(50);
    let before = select.clone();

    let decor = SqlDecor::mysql();
    let first = decor.prepare(&select).unwrap();
    let second = decor.prepare(&select).unwrap();

    assert_eq!(first, second);
    assert_eq!(select, before);
}

#[test]
fn test_concurrent_renders_share_tree() {
    let decor = SqlDecor::mysql();
    let select = Select::from("foo")
        .column_as("res", count_select("foo1", 100, 500))
        .column_as("res0", count_select("foo2", 50, 101))
        .limit(10)
        .offset(5);
    let expected = decor.prepare(&select).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| decor.prepare(&select).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_named_placeholders_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dialect]\nplatform = \"mysql\"\nplaceholder = \"named\"").unwrap();

    let decor = SqlDecor::from_config_file(file.path()).unwrap();
    assert_eq!(decor.placeholder_style(), PlaceholderStyle::Named);

    let prepared = decor
        .prepare(&Select::from("foo").column_as("res", count_select("foo1", 1, 2)).offset(3))
        .unwrap();
    assert_eq!(
        prepared.sql,
        "SELECT (SELECT count(foo1.id) AS `cnt` FROM `foo1` LIMIT :subselect1limit OFFSET :subselect1offset) AS `res` \
         FROM `foo` LIMIT 18446744073709551615 OFFSET :offset"
    );
}

#[test]
fn test_sql92_platform_from_config() {
    let decor = SqlDecor::new(AppConfig::new(DialectConfig::new(
        PlatformKind::Sql92,
        PlaceholderStyle::Positional,
    )));
    assert_eq!(decor.platform_kind(), PlatformKind::Sql92);

    let sql = decor.sql_string(&Select::from("foo").offset(10)).unwrap();
    assert_eq!(sql, "SELECT \"foo\".* FROM \"foo\" OFFSET 10");
}

#[test]
fn test_invalid_config_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dialect]\nplatform = \"sql92\"\nplaceholder = \"named\"").unwrap();

    assert!(matches!(
        SqlDecor::from_config_file(file.path()),
        Err(SqlDecorError::Config(_))
    ));
}

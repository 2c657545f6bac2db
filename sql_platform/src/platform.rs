//! Platform quoting rules

use serde_json::Value;

/// Identifier and value quoting for one SQL platform
pub trait Platform: Send + Sync {
    fn name(&self) -> &'static str;

    /// Quote a single identifier
    fn quote_identifier(&self, identifier: &str) -> String;

    /// Quote a dot-separated identifier chain such as `foo1.id`; a `*` segment is left bare
    fn quote_identifier_chain(&self, chain: &str) -> String {
        chain
            .split('.')
            .map(|segment| {
                if segment == "*" {
                    segment.to_string()
                } else {
                    self.quote_identifier(segment)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Render a value as an SQL literal
    fn quote_value(&self, value: &Value) -> String;
}

/// Literals shared by both platforms; only string quoting differs
fn quote_scalar(value: &Value, quote_string: impl Fn(&str) -> String) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_string(s),
        other => quote_string(&other.to_string()),
    }
}

/// MySQL / MariaDB
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl MySql {
    fn quote_string(s: &str) -> String {
        let mut quoted = String::with_capacity(s.len() + 2);
        quoted.push('\'');
        for c in s.chars() {
            match c {
                '\0' => quoted.push_str("\\0"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\\' => quoted.push_str("\\\\"),
                '\'' => quoted.push_str("\\'"),
                '"' => quoted.push_str("\\\""),
                '\x1a' => quoted.push_str("\\Z"),
                c => quoted.push(c),
            }
        }
        quoted.push('\'');
        quoted
    }
}

impl Platform for MySql {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        format!("`{}`", identifier.replace('`', "``"))
    }

    fn quote_value(&self, value: &Value) -> String {
        quote_scalar(value, Self::quote_string)
    }
}

/// Plain SQL-92
#[derive(Debug, Clone, Copy, Default)]
pub struct Sql92;

impl Platform for Sql92 {
    fn name(&self) -> &'static str {
        "SQL92"
    }

    fn quote_identifier(&self, identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }

    fn quote_value(&self, value: &Value) -> String {
        quote_scalar(value, |s| format!("'{}'", s.replace('\'', "''")))
    }
}

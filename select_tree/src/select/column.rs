//! Projected columns

use crate::select::builder::Select;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Expression of one projected column.
///
/// Serialized trees use `{"kind": ..., "value": ...}`; a kind this crate does
/// not know deserializes as [`ColumnExpr::Unsupported`] and is rejected when
/// rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnExpr {
    /// Plain identifier, qualified by the source table when rendered. `*` selects all columns.
    Identifier(String),
    /// Raw SQL fragment emitted verbatim
    Expression(String),
    /// Scalar subquery
    Select(Box<Select>),
    /// Expression kind outside this model, carrying the kind name
    #[serde(skip_serializing)]
    Unsupported(String),
}

impl ColumnExpr {
    pub fn identifier(name: impl Into<String>) -> Self {
        ColumnExpr::Identifier(name.into())
    }

    pub fn expression(sql: impl Into<String>) -> Self {
        ColumnExpr::Expression(sql.into())
    }

    pub fn is_select(&self) -> bool {
        matches!(self, ColumnExpr::Select(_))
    }

    /// The nested SELECT tree, if this column is a subquery
    pub fn as_select(&self) -> Option<&Select> {
        match self {
            ColumnExpr::Select(select) => Some(&**select),
            _ => None,
        }
    }

    /// Short name of the expression kind, for diagnostics
    pub fn kind(&self) -> &str {
        match self {
            ColumnExpr::Identifier(_) => "identifier",
            ColumnExpr::Expression(_) => "expression",
            ColumnExpr::Select(_) => "select",
            ColumnExpr::Unsupported(kind) => kind.as_str(),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnExpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Tagged {
            kind: String,
            #[serde(default)]
            value: Value,
        }

        let Tagged { kind, value } = Tagged::deserialize(deserializer)?;
        let expr = match kind.as_str() {
            "identifier" => {
                ColumnExpr::Identifier(serde_json::from_value(value).map_err(de::Error::custom)?)
            }
            "expression" => {
                ColumnExpr::Expression(serde_json::from_value(value).map_err(de::Error::custom)?)
            }
            "select" => ColumnExpr::Select(Box::new(
                serde_json::from_value(value).map_err(de::Error::custom)?,
            )),
            _ => ColumnExpr::Unsupported(kind),
        };

        Ok(expr)
    }
}

impl From<Select> for ColumnExpr {
    fn from(select: Select) -> Self {
        ColumnExpr::Select(Box::new(select))
    }
}

impl From<&str> for ColumnExpr {
    fn from(name: &str) -> Self {
        ColumnExpr::Identifier(name.to_string())
    }
}

/// A projected column: expression plus optional alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub alias: Option<String>,
    pub expr: ColumnExpr,
}

impl Column {
    pub fn new(expr: impl Into<ColumnExpr>) -> Self {
        Self {
            alias: None,
            expr: expr.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, expr: impl Into<ColumnExpr>) -> Self {
        Self {
            alias: Some(alias.into()),
            expr: expr.into(),
        }
    }
}

//! SELECT tree builder
//!
//! A [`Select`] is built once by the caller and then handed, read-only, to a
//! platform renderer. Rendering never mutates it.

use crate::errors::SqlError;
use crate::select::column::{Column, ColumnExpr};
use crate::select::filter::QueryFilter;
use crate::select::join::JoinClause;
use crate::select::ordering::SortOrder;
use crate::select::pagination::PageBound;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source table of a SELECT, optionally aliased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl TableSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Name that qualifies columns: the alias when present
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Dialect-agnostic SELECT statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub(crate) table: TableSource,
    #[serde(default)]
    pub(crate) columns: Vec<Column>,
    #[serde(default)]
    pub(crate) joins: Vec<JoinClause>,
    #[serde(default)]
    pub(crate) conditions: Vec<QueryFilter>,
    #[serde(default)]
    pub(crate) order_by: Vec<(String, SortOrder)>,
    #[serde(default)]
    pub(crate) limit: Option<PageBound>,
    #[serde(default)]
    pub(crate) offset: Option<PageBound>,
}

impl Select {
    /// Start a SELECT over `table`; with no columns added it selects `table.*`
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: TableSource::new(table),
            columns: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Start a SELECT over `table AS alias`
    pub fn from_aliased(table: impl Into<String>, alias: impl Into<String>) -> Self {
        let mut select = Self::from(table);
        select.table.alias = Some(alias.into());
        select
    }

    /// Read a SELECT tree from its JSON form
    pub fn from_json(value: Value) -> Result<Self, SqlError> {
        serde_json::from_value(value).map_err(|err| {
            tracing::debug!("Rejected serialized select tree: {}", err);
            SqlError::Deserialization(err)
        })
    }

    /// Add an unaliased column
    pub fn column(mut self, expr: impl Into<ColumnExpr>) -> Self {
        self.columns.push(Column::new(expr));
        self
    }

    /// Add a column rendered as `expr AS alias`
    pub fn column_as(mut self, alias: impl Into<String>, expr: impl Into<ColumnExpr>) -> Self {
        self.columns.push(Column::aliased(alias, expr));
        self
    }

    /// Replace the column list
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Set limit
    pub fn limit(mut self, limit: impl Into<PageBound>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Set offset
    pub fn offset(mut self, offset: impl Into<PageBound>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn table(&self) -> &TableSource {
        &self.table
    }

    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get_joins(&self) -> &[JoinClause] {
        &self.joins
    }

    pub fn get_conditions(&self) -> &[QueryFilter] {
        &self.conditions
    }

    pub fn get_order_by(&self) -> &[(String, SortOrder)] {
        &self.order_by
    }

    pub fn get_limit(&self) -> Option<&PageBound> {
        self.limit.as_ref()
    }

    pub fn get_offset(&self) -> Option<&PageBound> {
        self.offset.as_ref()
    }
}

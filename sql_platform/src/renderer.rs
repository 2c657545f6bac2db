//! Generic SELECT rendering
//!
//! [`SelectRenderer`] assembles the full statement and delegates quoting and
//! pagination to a [`SelectDecorator`]. Nested SELECT columns are rendered
//! recursively with their own parameter name prefix.

use crate::platform::Platform;
use crate::sql_builder::{BuildMode, SqlBuilder};
use crate::subselect::{enumerate_subselects, subselect_prefix};
use config::PlaceholderStyle;
use select_tree::select::{
    JoinCondition, LogicalOperator, QueryCondition, QueryFilter, QueryOperator,
};
use select_tree::{ColumnExpr, ParameterContainer, Select, SqlError, TableSource};
use serde::Serialize;
use serde_json::Value;

/// SQL text with placeholders and the values bound to them, in placeholder order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedStatement {
    pub sql: String,
    pub parameters: ParameterContainer,
}

/// Dialect strategy plugged into the generic renderer
pub trait SelectDecorator: Send + Sync {
    fn platform(&self) -> &dyn Platform;

    /// Render the LIMIT/OFFSET fragment of one statement, including its leading space.
    /// The default emits each clause independently.
    fn build_pagination(&self, select: &Select, builder: &mut SqlBuilder<'_>) -> Result<(), SqlError> {
        if let Some(limit) = select.get_limit() {
            builder.push_str(" LIMIT ");
            builder.push_page_bound("limit", limit)?;
        }
        if let Some(offset) = select.get_offset() {
            builder.push_str(" OFFSET ");
            builder.push_page_bound("offset", offset)?;
        }
        Ok(())
    }

    /// SQL with placeholders plus the bound parameters
    fn prepare(&self, select: &Select, style: PlaceholderStyle) -> Result<PreparedStatement, SqlError> {
        SelectRenderer::new(self).prepare(select, style)
    }

    /// Self-contained SQL with every value inlined
    fn sql_string(&self, select: &Select) -> Result<String, SqlError> {
        SelectRenderer::new(self).sql_string(select)
    }
}

/// Undecorated rendering over any platform
#[derive(Debug, Clone, Default)]
pub struct GenericSelectDecorator<P: Platform> {
    platform: P,
}

impl<P: Platform> GenericSelectDecorator<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }
}

impl<P: Platform> SelectDecorator for GenericSelectDecorator<P> {
    fn platform(&self) -> &dyn Platform {
        &self.platform
    }
}

pub struct SelectRenderer<'d, D: SelectDecorator + ?Sized> {
    decorator: &'d D,
}

impl<'d, D: SelectDecorator + ?Sized> SelectRenderer<'d, D> {
    pub fn new(decorator: &'d D) -> Self {
        Self { decorator }
    }

    pub fn prepare(&self, select: &Select, style: PlaceholderStyle) -> Result<PreparedStatement, SqlError> {
        let mut builder = SqlBuilder::new(self.decorator.platform(), BuildMode::Prepare(style));
        self.build_select(select, &mut builder)?;
        let (sql, parameters) = builder.into_sql();

        tracing::debug!(
            platform = self.decorator.platform().name(),
            params = parameters.len(),
            "Prepared select: {}",
            sql
        );
        Ok(PreparedStatement { sql, parameters })
    }

    pub fn sql_string(&self, select: &Select) -> Result<String, SqlError> {
        let mut builder = SqlBuilder::new(self.decorator.platform(), BuildMode::Literal);
        self.build_select(select, &mut builder)?;
        let (sql, _) = builder.into_sql();

        tracing::debug!(platform = self.decorator.platform().name(), "Rendered select: {}", sql);
        Ok(sql)
    }

    /// Render one complete statement under the builder's current prefix
    pub fn build_select(&self, select: &Select, builder: &mut SqlBuilder<'_>) -> Result<(), SqlError> {
        tracing::trace!(table = %select.table().name, prefix = builder.prefix(), "Rendering select");

        builder.push_str("SELECT ");
        self.build_columns(select, builder)?;
        builder.push_str(" FROM ");
        Self::build_table(select.table(), builder);
        Self::build_joins(select, builder);
        Self::build_where(select, builder)?;
        Self::build_order(select, builder);
        self.decorator.build_pagination(select, builder)
    }

    fn build_columns(&self, select: &Select, builder: &mut SqlBuilder<'_>) -> Result<(), SqlError> {
        let table_ref = select.table().reference();
        if select.get_columns().is_empty() {
            builder.push_identifier(table_ref);
            builder.push_str(".*");
            return Ok(());
        }

        let mut subselects = enumerate_subselects(select).into_iter();

        builder.push_iter(select.get_columns().iter(), ", ", |builder, column| {
            match &column.expr {
                ColumnExpr::Identifier(name) if name == "*" => {
                    builder.push_identifier(table_ref);
                    builder.push_str(".*");
                }
                ColumnExpr::Identifier(name) if name.contains('.') => {
                    builder.push_identifier_chain(name);
                }
                ColumnExpr::Identifier(name) => {
                    builder.push_identifier(table_ref);
                    builder.push('.');
                    builder.push_identifier(name);
                }
                ColumnExpr::Expression(sql) => builder.push_str(sql),
                ColumnExpr::Select(_) => {
                    let subselect = subselects.next().ok_or_else(|| {
                        SqlError::Internal("nested select missing from enumeration".to_string())
                    })?;
                    let prefix = subselect_prefix(builder.prefix(), subselect.ordinal);

                    builder.push('(');
                    builder.with_prefix(prefix, |builder| self.build_select(subselect.select, builder))?;
                    builder.push(')');
                }
                ColumnExpr::Unsupported(_) => {
                    return Err(SqlError::UnsupportedExpression(format!(
                        "column `{}` has expression kind `{}`",
                        column.alias.as_deref().unwrap_or("<unnamed>"),
                        column.expr.kind()
                    )));
                }
            }

            if let Some(alias) = &column.alias {
                builder.push_str(" AS ");
                builder.push_identifier(alias);
            }
            Ok(())
        })
    }

    fn build_table(table: &TableSource, builder: &mut SqlBuilder<'_>) {
        builder.push_identifier(&table.name);
        if let Some(alias) = &table.alias {
            builder.push_str(" AS ");
            builder.push_identifier(alias);
        }
    }

    fn build_joins(select: &Select, builder: &mut SqlBuilder<'_>) {
        for join in select.get_joins() {
            builder.push(' ');
            builder.push_str(join.join_type.to_sql());
            builder.push(' ');
            builder.push_identifier(&join.table);
            if let Some(alias) = &join.alias {
                builder.push_str(" AS ");
                builder.push_identifier(alias);
            }

            match &join.condition {
                JoinCondition::On {
                    left_field,
                    right_field,
                } => {
                    builder.push_str(" ON ");
                    builder.push_identifier_chain(left_field);
                    builder.push_str(" = ");
                    builder.push_identifier_chain(right_field);
                }
                JoinCondition::Using(columns) => {
                    let quoted: Vec<String> = columns
                        .iter()
                        .map(|column| builder.platform().quote_identifier(column))
                        .collect();
                    builder.push_str(" USING (");
                    builder.push_str(quoted.join(", "));
                    builder.push(')');
                }
                JoinCondition::None => {}
            }
        }
    }

    fn build_where(select: &Select, builder: &mut SqlBuilder<'_>) -> Result<(), SqlError> {
        let conditions = select.get_conditions();
        if conditions.is_empty() {
            return Ok(());
        }

        // WHERE values are numbered per statement: where1, where2, ...
        let mut param_counter = 0;
        builder.push_str(" WHERE ");
        builder.push_iter(conditions.iter(), " AND ", |builder, filter| {
            Self::build_filter(filter, builder, &mut param_counter)
        })
    }

    fn build_filter(
        filter: &QueryFilter,
        builder: &mut SqlBuilder<'_>,
        param_counter: &mut usize,
    ) -> Result<(), SqlError> {
        match filter {
            QueryFilter::Condition(condition) => Self::build_condition(condition, builder, param_counter),
            QueryFilter::Group { operator, filters } if filters.is_empty() => {
                // Empty AND is vacuously true, empty OR is false
                builder.push_str(match operator {
                    LogicalOperator::And => "1=1",
                    LogicalOperator::Or => "1=0",
                });
                Ok(())
            }
            QueryFilter::Group { operator, filters } => {
                builder.push('(');
                builder.push_iter(filters.iter(), operator.to_sql(), |builder, filter| {
                    Self::build_filter(filter, builder, param_counter)
                })?;
                builder.push(')');
                Ok(())
            }
        }
    }

    fn build_condition(
        condition: &QueryCondition,
        builder: &mut SqlBuilder<'_>,
        param_counter: &mut usize,
    ) -> Result<(), SqlError> {
        let field = &condition.field;

        match (&condition.operator, &condition.value) {
            (QueryOperator::IsNull, _) | (QueryOperator::Eq, None) => {
                builder.push_identifier_chain(field);
                builder.push_str(" IS NULL");
            }
            (QueryOperator::IsNotNull, _) | (QueryOperator::Ne, None) => {
                builder.push_identifier_chain(field);
                builder.push_str(" IS NOT NULL");
            }
            (QueryOperator::In, Some(Value::Array(values))) if values.is_empty() => {
                builder.push_str("1=0");
            }
            (QueryOperator::NotIn, Some(Value::Array(values))) if values.is_empty() => {
                builder.push_str("1=1");
            }
            (operator @ (QueryOperator::In | QueryOperator::NotIn), Some(Value::Array(values))) => {
                builder.push_identifier_chain(field);
                builder.push_str(if *operator == QueryOperator::In {
                    " IN ("
                } else {
                    " NOT IN ("
                });
                builder.push_iter(values.iter(), ", ", |builder, value| {
                    *param_counter += 1;
                    builder.push_param(&format!("where{}", param_counter), value.clone())
                })?;
                builder.push(')');
            }
            (QueryOperator::NotIn, _) => builder.push_str("1=1"),
            (operator, Some(value)) => match operator.comparison_sql() {
                Some(op) => {
                    builder.push_identifier_chain(field);
                    builder.push(' ');
                    builder.push_str(op);
                    builder.push(' ');
                    *param_counter += 1;
                    builder.push_param(&format!("where{}", param_counter), value.clone())?;
                }
                // IN with a non-array value
                None => builder.push_str("1=0"),
            },
            // Comparison without a value
            (_, None) => builder.push_str("1=0"),
        }

        Ok(())
    }

    fn build_order(select: &Select, builder: &mut SqlBuilder<'_>) {
        let order_by = select.get_order_by();
        if order_by.is_empty() {
            return;
        }

        let items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| {
                format!("{} {}", builder.platform().quote_identifier_chain(field), order.to_sql())
            })
            .collect();
        builder.push_str(" ORDER BY ");
        builder.push_str(items.join(", "));
    }
}

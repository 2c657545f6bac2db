//! Subquery enumeration
//!
//! Nested SELECTs in a column list are numbered 1, 2, 3, ... in declaration
//! order, counting only the SELECT columns. The ordinal scopes the parameter
//! names of each nested statement.

use select_tree::Select;

const SUBSELECT_PREFIX: &str = "subselect";

/// A nested SELECT found in a column list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subselect<'a> {
    /// 1-based position among the SELECT columns
    pub ordinal: usize,
    /// Position in the full column list
    pub column_index: usize,
    pub alias: Option<&'a str>,
    pub select: &'a Select,
}

/// List the columns of `select` that are themselves SELECT trees
pub fn enumerate_subselects(select: &Select) -> Vec<Subselect<'_>> {
    select
        .get_columns()
        .iter()
        .enumerate()
        .filter_map(|(column_index, column)| {
            column.expr.as_select().map(|nested| (column_index, column, nested))
        })
        .enumerate()
        .map(|(i, (column_index, column, nested))| Subselect {
            ordinal: i + 1,
            column_index,
            alias: column.alias.as_deref(),
            select: nested,
        })
        .collect()
}

/// Parameter name prefix of the nested statement at `ordinal` under `parent_prefix`
pub fn subselect_prefix(parent_prefix: &str, ordinal: usize) -> String {
    format!("{}{}{}", parent_prefix, SUBSELECT_PREFIX, ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_tree::ColumnExpr;

    #[test]
    fn test_no_subselects() {
        let select = Select::from("foo")
            .column("id")
            .column_as("cnt", ColumnExpr::expression("count(*)"));

        assert!(enumerate_subselects(&select).is_empty());
        assert!(enumerate_subselects(&Select::from("foo")).is_empty());
    }

    #[test]
    fn test_ordinals_count_only_select_columns() {
        let first = Select::from("foo1");
        let second = Select::from("foo2");
        let select = Select::from("foo")
            .column_as("plain", ColumnExpr::expression("1"))
            .column_as("res", first.clone())
            .column_as("res0", second.clone());

        let subselects = enumerate_subselects(&select);
        assert_eq!(subselects.len(), 2);

        assert_eq!(subselects[0].ordinal, 1);
        assert_eq!(subselects[0].column_index, 1);
        assert_eq!(subselects[0].alias, Some("res"));
        assert_eq!(subselects[0].select, &first);

        assert_eq!(subselects[1].ordinal, 2);
        assert_eq!(subselects[1].column_index, 2);
        assert_eq!(subselects[1].alias, Some("res0"));
        assert_eq!(subselects[1].select, &second);
    }

    #[test]
    fn test_only_direct_columns_are_enumerated() {
        let inner = Select::from("deep");
        let middle = Select::from("foo1").column_as("d", inner);
        let select = Select::from("foo").column(middle);

        let subselects = enumerate_subselects(&select);
        assert_eq!(subselects.len(), 1);
        assert_eq!(subselects[0].alias, None);
        assert_eq!(enumerate_subselects(subselects[0].select).len(), 1);
    }

    #[test]
    fn test_prefix_composition() {
        assert_eq!(subselect_prefix("", 1), "subselect1");
        assert_eq!(subselect_prefix("subselect1", 2), "subselect1subselect2");
    }
}

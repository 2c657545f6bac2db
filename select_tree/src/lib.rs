//! Select Tree - dialect-agnostic SELECT representation for sqldecor
//!
//! This crate provides the SELECT tree handed to platform renderers, the
//! ordered parameter container they fill, and the shared error type.

pub mod errors;
pub mod parameter_container;
pub mod prelude;
pub mod select;

pub use errors::SqlError;
pub use parameter_container::ParameterContainer;
pub use select::{
    Column, ColumnExpr, JoinClause, JoinCondition, JoinType, PageBound, QueryFilter,
    QueryOperator, Select, SortOrder, TableSource,
};

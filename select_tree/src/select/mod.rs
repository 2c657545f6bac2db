//! SELECT tree
//!
//! This module provides the dialect-agnostic SELECT representation.

pub mod builder;
pub mod column;
pub mod filter;
pub mod join;
pub mod ordering;
pub mod pagination;


pub use builder::{Select, TableSource};
pub use column::{Column, ColumnExpr};
pub use filter::{LogicalOperator, QueryCondition, QueryFilter, QueryOperator};
pub use join::{JoinClause, JoinCondition, JoinType};
pub use ordering::SortOrder;
pub use pagination::PageBound;

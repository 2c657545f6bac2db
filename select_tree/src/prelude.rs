//! Convenience re-exports for common select-tree usage

// SELECT tree
pub use crate::select::{Column, ColumnExpr, PageBound, Select, TableSource};

// Clauses
pub use crate::select::{JoinClause, JoinType, QueryFilter, SortOrder};

// Parameter sink
pub use crate::parameter_container::ParameterContainer;

// Error types
pub use crate::errors::SqlError;

// Common external dependencies that are frequently used
pub use serde_json::{json, Value};

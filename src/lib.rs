//! # sqldecor
//!
//! Renders a database-agnostic SELECT tree into dialect-specific SQL. The MySQL
//! decorator handles backtick quoting, the LIMIT-required-with-OFFSET rule and
//! scalar subqueries whose LIMIT/OFFSET placeholders must not collide with the
//! outer statement's.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqldecor::prelude::*;
//!
//! let nested = Select::from("foo1")
//!     .column_as("cnt", ColumnExpr::expression("count(foo1.id)"))
//!     .limit(100)
//!     .offset(500);
//! let select = Select::from("foo").column_as("res", nested).limit(10).offset(50);
//!
//! let decor = SqlDecor::mysql();
//!
//! let prepared = decor.prepare(&select)?;
//! assert_eq!(
//!     prepared.sql,
//!     "SELECT (SELECT count(foo1.id) AS `cnt` FROM `foo1` LIMIT ? OFFSET ?) AS `res` FROM `foo` LIMIT ? OFFSET ?"
//! );
//! let names: Vec<&str> = prepared.parameters.names().collect();
//! assert_eq!(names, ["subselect1limit", "subselect1offset", "limit", "offset"]);
//!
//! let sql = decor.sql_string(&select)?;
//! assert!(sql.ends_with("FROM `foo` LIMIT 10 OFFSET 50"));
//! # Ok::<(), sqldecor::SqlDecorError>(())
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::SqlDecor;
pub use crate::errors::SqlDecorError;

// Re-export centralized config
pub use config::{AppConfig, DialectConfig, PlaceholderStyle, PlatformKind};

// Re-export internal crates used in the public API
pub use select_tree;
pub use sql_platform;

//! Convenience re-exports for common sqldecor usage
//!
//! # Example
//!
//! ```rust
//! use sqldecor::prelude::*;
//!
//! let select = Select::from("foo").limit(5).offset(10);
//! let prepared = SqlDecor::mysql().prepare(&select).unwrap();
//! assert_eq!(prepared.sql, "SELECT `foo`.* FROM `foo` LIMIT ? OFFSET ?");
//! ```

// Core components
pub use crate::core::SqlDecor;
pub use crate::errors::SqlDecorError;

// Re-export centralized config
pub use config::{AppConfig, DialectConfig, PlaceholderStyle, PlatformKind};

// SELECT tree types
pub use select_tree::prelude::*;

// Rendering
pub use sql_platform::{MysqlSelectDecorator, PreparedStatement, SelectDecorator};

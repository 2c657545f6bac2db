//! SQL platform rendering for sqldecor
//!
//! Turns a [`select_tree::Select`] into dialect-specific SQL text, either with
//! placeholders plus an ordered parameter container, or with every value
//! inlined. Rendering is split into a generic statement renderer and a
//! per-dialect [`SelectDecorator`] that supplies quoting and pagination.

pub mod mysql;
pub mod platform;
pub mod renderer;
pub mod sql_builder;
pub mod subselect;

pub use mysql::{MysqlSelectDecorator, LIMIT_SENTINEL};
pub use platform::{MySql, Platform, Sql92};
pub use renderer::{GenericSelectDecorator, PreparedStatement, SelectDecorator, SelectRenderer};
pub use sql_builder::{BuildMode, SqlBuilder};
pub use subselect::{enumerate_subselects, subselect_prefix, Subselect};

use config::PlatformKind;

/// Decorator for the configured platform
pub fn decorator_for(kind: PlatformKind) -> Box<dyn SelectDecorator> {
    match kind {
        PlatformKind::Mysql => Box::new(MysqlSelectDecorator::new()),
        PlatformKind::Sql92 => Box::new(GenericSelectDecorator::new(Sql92)),
    }
}

//! MySQL SELECT decorator
//!
//! MySQL has no OFFSET without LIMIT. When only an offset is given the
//! largest unsigned 64-bit value is written as the limit, inline rather than
//! bound.

use crate::platform::{MySql, Platform};
use crate::renderer::SelectDecorator;
use crate::sql_builder::SqlBuilder;
use select_tree::{Select, SqlError};

/// `u64::MAX` as literal SQL text
pub const LIMIT_SENTINEL: &str = "18446744073709551615";

#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlSelectDecorator {
    platform: MySql,
}

impl MysqlSelectDecorator {
    pub fn new() -> Self {
        Self { platform: MySql }
    }
}

impl SelectDecorator for MysqlSelectDecorator {
    fn platform(&self) -> &dyn Platform {
        &self.platform
    }

    fn build_pagination(&self, select: &Select, builder: &mut SqlBuilder<'_>) -> Result<(), SqlError> {
        match (select.get_limit(), select.get_offset()) {
            (None, None) => {}
            (Some(limit), None) => {
                builder.push_str(" LIMIT ");
                builder.push_page_bound("limit", limit)?;
            }
            (None, Some(offset)) => {
                builder.push_str(" LIMIT ");
                builder.push_str(LIMIT_SENTINEL);
                builder.push_str(" OFFSET ");
                builder.push_page_bound("offset", offset)?;
            }
            (Some(limit), Some(offset)) => {
                builder.push_str(" LIMIT ");
                builder.push_page_bound("limit", limit)?;
                builder.push_str(" OFFSET ");
                builder.push_page_bound("offset", offset)?;
            }
        }

        Ok(())
    }
}

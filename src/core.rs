//! Core sqldecor functionality
//!
//! This module contains the main SqlDecor struct, which binds a configured
//! platform decorator to the prepare and literal render operations.

use config::{AppConfig, PlaceholderStyle, PlatformKind};
use select_tree::Select;
use sql_platform::{PreparedStatement, SelectDecorator};
use std::path::Path;

use crate::errors::SqlDecorError;

/// Renders SELECT trees for the configured platform.
///
/// Holds no per-render state, so one instance can serve concurrent renders.
pub struct SqlDecor {
    config: AppConfig,
    decorator: Box<dyn SelectDecorator>,
}

impl SqlDecor {
    /// Create a renderer for the given configuration
    pub fn new(config: AppConfig) -> Self {
        let decorator = sql_platform::decorator_for(config.dialect.platform);
        Self { config, decorator }
    }

    /// MySQL with positional `?` placeholders
    pub fn mysql() -> Self {
        Self::new(AppConfig::default())
    }

    /// Create a renderer from `SQLDECOR_CONFIG`, `./sqldecor.toml` or defaults
    pub fn load() -> Result<Self, SqlDecorError> {
        Ok(Self::new(AppConfig::load()?))
    }

    /// Create a renderer from a TOML configuration file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, SqlDecorError> {
        Ok(Self::new(AppConfig::from_file(path)?))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn platform_kind(&self) -> PlatformKind {
        self.config.dialect.platform
    }

    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.config.dialect.placeholder
    }

    /// Render SQL with placeholders and collect every bound value, nested
    /// statements included, in placeholder order
    pub fn prepare(&self, select: &Select) -> Result<PreparedStatement, SqlDecorError> {
        trace_log!("[PREPARE] Table: {}", select.table().name);
        let prepared = self.decorator.prepare(select, self.placeholder_style())?;
        debug_log!("[PREPARE] SQL: {}", prepared.sql);
        debug_log!("[PREPARE] Params count: {}", prepared.parameters.len());
        Ok(prepared)
    }

    /// Render self-contained SQL with all values inlined
    pub fn sql_string(&self, select: &Select) -> Result<String, SqlDecorError> {
        trace_log!("[SQL_STRING] Table: {}", select.table().name);
        let sql = self.decorator.sql_string(select)?;
        debug_log!("[SQL_STRING] SQL: {}", sql);
        Ok(sql)
    }
}

impl Default for SqlDecor {
    fn default() -> Self {
        Self::mysql()
    }
}

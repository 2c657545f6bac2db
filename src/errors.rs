//! Error types for the sqldecor crate
//!
//! This module contains all error types that can be returned by sqldecor operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlDecorError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] select_tree::SqlError),
}

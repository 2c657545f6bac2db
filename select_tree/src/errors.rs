use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlError {
    #[error("Unsupported column expression: {0}")]
    UnsupportedExpression(String),

    #[error("Invalid LIMIT/OFFSET bound: {0}")]
    InvalidBound(String),

    #[error("Parameter name collision: {0}")]
    ParameterCollision(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

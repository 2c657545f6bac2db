//! LIMIT / OFFSET bound values

use crate::errors::SqlError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A LIMIT or OFFSET value as the caller supplied it.
///
/// Integer bounds cover the full unsigned 64-bit range, so a JSON number up
/// to `18446744073709551615` deserializes as `Int`. Text bounds may hold any
/// digits and are carried through untouched, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageBound {
    Int(u64),
    Text(String),
}

impl PageBound {
    /// The value to bind for a placeholder, keeping the original representation
    pub fn to_value(&self) -> Value {
        match self {
            PageBound::Int(n) => Value::from(*n),
            PageBound::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Literal SQL text of the bound, written exactly as supplied
impl fmt::Display for PageBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageBound::Int(n) => write!(f, "{}", n),
            PageBound::Text(s) => f.write_str(s),
        }
    }
}

// `u64` is the only integer `From` impl so untyped literals infer to it.
impl From<u64> for PageBound {
    fn from(value: u64) -> Self {
        PageBound::Int(value)
    }
}

impl TryFrom<i64> for PageBound {
    type Error = SqlError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(PageBound::Int)
            .map_err(|_| SqlError::InvalidBound(value.to_string()))
    }
}

impl TryFrom<i32> for PageBound {
    type Error = SqlError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        PageBound::try_from(i64::from(value))
    }
}

impl TryFrom<usize> for PageBound {
    type Error = SqlError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(PageBound::Int)
            .map_err(|_| SqlError::InvalidBound(value.to_string()))
    }
}

impl From<&str> for PageBound {
    fn from(value: &str) -> Self {
        PageBound::Text(value.to_string())
    }
}

impl From<String> for PageBound {
    fn from(value: String) -> Self {
        PageBound::Text(value)
    }
}

//! Data kinds of JSON values.
//!
//! All kinds use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Integer` is a refinement of `Number`: `Number` accepts integers, not the
//! other way around.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CoreError, DataTypeError};

/// The data kind of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Null,
    Boolean,
    Number,
    Integer,
    String,
    Array,
    Object,
}

impl DataKind {
    pub const ALL: [Self; 7] = [
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::Integer,
        Self::String,
        Self::Array,
        Self::Object,
    ];

    /// Classify a value. Numbers representable as `i64` or `u64` are `Integer`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Check whether a value of kind `actual` satisfies this expected kind.
    #[must_use]
    pub fn accepts(self, actual: Self) -> bool {
        self == actual || (self == Self::Number && actual == Self::Integer)
    }

    /// The error raised when a value is not of this kind.
    #[must_use]
    pub fn mismatch(self) -> DataTypeError {
        DataTypeError::with_message(format!("The passed value is not {self}."))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the `as_str` names, case-insensitively and ignoring surrounding
/// whitespace. `bool` and `int` are accepted as aliases.
impl FromStr for DataKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "integer" | "int" => Ok(Self::Integer),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(CoreError::Validation(format!("unknown data kind '{other}'"))),
        }
    }
}

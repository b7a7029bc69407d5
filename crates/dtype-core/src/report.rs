//! Serializable `{name, message}` view of errors.
//!
//! Reports compare field by field, so two errors built from the same
//! arguments produce equal reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, DataTypeError};

/// Name and message of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorReport {
    pub name: String,
    pub message: String,
}

impl DataTypeError {
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

impl From<&DataTypeError> for ErrorReport {
    fn from(err: &DataTypeError) -> Self {
        Self {
            name: err.name().to_owned(),
            message: err.message().to_owned(),
        }
    }
}

impl From<DataTypeError> for ErrorReport {
    fn from(err: DataTypeError) -> Self {
        Self {
            name: DataTypeError::NAME.to_owned(),
            message: err.into_message(),
        }
    }
}

impl From<&CoreError> for ErrorReport {
    fn from(err: &CoreError) -> Self {
        Self {
            name: err.name().to_owned(),
            message: err.to_string(),
        }
    }
}

impl TryFrom<ErrorReport> for DataTypeError {
    type Error = CoreError;

    fn try_from(report: ErrorReport) -> Result<Self, Self::Error> {
        if report.name != Self::NAME {
            return Err(CoreError::Validation(format!(
                "report name '{}' is not {}",
                report.name,
                Self::NAME
            )));
        }
        Ok(Self::with_message(report.message))
    }
}

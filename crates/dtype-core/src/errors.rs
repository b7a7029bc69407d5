//! Error types for dtype.
//!
//! `DataTypeError` is the signal raised when a value does not have the
//! expected data type. It carries a caller-supplied message or a fixed
//! default. `CoreError` is the wider sum type in which it appears as the
//! `DataType` variant, for callers that propagate more than one failure kind.

use thiserror::Error;

/// Convenience alias for results carrying a [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// A value did not have the expected data type.
///
/// The name is always [`DataTypeError::NAME`]. The message is never empty:
/// constructing without a message, or with an empty one, falls back to
/// [`DataTypeError::DEFAULT_MESSAGE`].
///
/// ```
/// use dtype_core::DataTypeError;
///
/// let err = DataTypeError::new();
/// assert_eq!(err.name(), "DataTypeError");
/// assert_eq!(err.message(), "The data type of the passed value is invalid.");
///
/// let err = DataTypeError::with_message("The passed value is not object.");
/// assert_eq!(err.message(), "The passed value is not object.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct DataTypeError {
    message: String,
}

impl DataTypeError {
    /// Fixed identifier of this error.
    pub const NAME: &'static str = "DataTypeError";

    /// Message used when the caller supplies none.
    pub const DEFAULT_MESSAGE: &'static str = "The data type of the passed value is invalid.";

    /// Create an error carrying the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_owned(),
        }
    }

    /// Create an error carrying `message`. An empty message yields the default.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::new()
        } else {
            Self { message }
        }
    }

    /// Create an error from an optional message.
    ///
    /// `None` and `Some("")` both yield the default message.
    #[must_use]
    pub fn from_message<S: Into<String>>(message: Option<S>) -> Self {
        message.map_or_else(Self::new, Self::with_message)
    }

    /// Always [`Self::NAME`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// The supplied message, or the default one.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the error fell back to [`Self::DEFAULT_MESSAGE`].
    #[must_use]
    pub fn is_default_message(&self) -> bool {
        self.message == Self::DEFAULT_MESSAGE
    }

    /// Consume the error and return its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Default for DataTypeError {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for DataTypeError {
    fn from(message: &str) -> Self {
        Self::with_message(message)
    }
}

impl From<String> for DataTypeError {
    fn from(message: String) -> Self {
        Self::with_message(message)
    }
}

impl From<Option<String>> for DataTypeError {
    fn from(message: Option<String>) -> Self {
        Self::from_message(message)
    }
}

/// Errors raised by dtype-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value did not have the expected data type.
    #[error(transparent)]
    DataType(#[from] DataTypeError),

    /// Data failed validation for a reason other than its kind.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// The variant tag, used as the error name in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DataType(_) => DataTypeError::NAME,
            Self::Validation(_) => "ValidationError",
            Self::Other(_) => "Error",
        }
    }

    /// The inner `DataTypeError`, if this is the `DataType` variant.
    #[must_use]
    pub const fn as_data_type(&self) -> Option<&DataTypeError> {
        match self {
            Self::DataType(err) => Some(err),
            _ => None,
        }
    }
}

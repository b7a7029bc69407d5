//! Kind checks that raise [`DataTypeError`] on mismatch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DataTypeError;
use crate::kinds::DataKind;

/// Tunables for [`Checker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// Accept `null` wherever any kind is expected.
    pub allow_null: bool,
    /// Let an expected `Number` accept integral values.
    pub integer_as_number: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            allow_null: false,
            integer_as_number: true,
        }
    }
}

/// Compares values against expected data kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker {
    options: CheckOptions,
}

impl Checker {
    #[must_use]
    pub const fn new(options: CheckOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> CheckOptions {
        self.options
    }

    fn admits(&self, expected: DataKind, actual: DataKind) -> bool {
        if actual == DataKind::Null && self.options.allow_null {
            return true;
        }
        if self.options.integer_as_number {
            expected.accepts(actual)
        } else {
            expected == actual
        }
    }

    /// Return `value` if it is of `kind`, else the mismatch error for `kind`.
    pub fn expect<'a>(&self, value: &'a Value, kind: DataKind) -> Result<&'a Value, DataTypeError> {
        let actual = DataKind::of(value);
        if self.admits(kind, actual) {
            return Ok(value);
        }
        tracing::debug!(expected = %kind, %actual, "data kind mismatch");
        Err(kind.mismatch())
    }

    /// Return `value` if any of `kinds` admits it.
    ///
    /// The error message joins the expected kinds with `" or "`. An empty
    /// `kinds` slice admits nothing and yields the default message.
    pub fn expect_any_of<'a>(
        &self,
        value: &'a Value,
        kinds: &[DataKind],
    ) -> Result<&'a Value, DataTypeError> {
        if kinds.is_empty() {
            return Err(DataTypeError::new());
        }
        let actual = DataKind::of(value);
        if kinds.iter().any(|&kind| self.admits(kind, actual)) {
            return Ok(value);
        }
        let expected = kinds
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        tracing::debug!(%expected, %actual, "data kind mismatch");
        Err(DataTypeError::with_message(format!(
            "The passed value is not {expected}."
        )))
    }

    /// Look up `field` on an object value and check its kind.
    ///
    /// `value` must be an object even when `allow_null` is set. A missing
    /// field is reported the same way as a field of the wrong kind, with the
    /// field name as a prefix.
    pub fn expect_field<'a>(
        &self,
        value: &'a Value,
        field: &str,
        kind: DataKind,
    ) -> Result<&'a Value, DataTypeError> {
        let Some(map) = value.as_object() else {
            tracing::debug!(actual = %DataKind::of(value), "field lookup on non-object");
            return Err(DataKind::Object.mismatch());
        };
        let Some(inner) = map.get(field) else {
            tracing::debug!(field, expected = %kind, "missing field");
            return Err(field_mismatch(field, kind));
        };
        self.expect(inner, kind)
            .map_err(|_| field_mismatch(field, kind))
    }
}

fn field_mismatch(field: &str, kind: DataKind) -> DataTypeError {
    DataTypeError::with_message(format!("{field}: {}", kind.mismatch()))
}

/// Check `value` against `kind` with default options.
pub fn expect(value: &Value, kind: DataKind) -> Result<&Value, DataTypeError> {
    Checker::default().expect(value, kind)
}

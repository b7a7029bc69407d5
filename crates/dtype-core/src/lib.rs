//! # dtype-core
//!
//! The `DataTypeError` signal and the kind checks that raise it.
//!
//! This crate provides:
//! - `DataTypeError`, the named error for a value of the wrong data type
//! - `CoreError`, the crate-wide error sum type carrying it as a variant
//! - `DataKind` classification of JSON values
//! - `Checker`, which compares values against expected kinds
//! - `ErrorReport`, the serializable `{name, message}` view of an error

pub mod check;
pub mod errors;
pub mod kinds;
pub mod report;

pub use check::{CheckOptions, Checker, expect};
pub use errors::{CoreError, DataTypeError, Result};
pub use kinds::DataKind;
pub use report::ErrorReport;

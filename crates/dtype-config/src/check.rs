//! Kind checker configuration.

use dtype_core::CheckOptions;
use serde::{Deserialize, Serialize};

const fn default_integer_as_number() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Accept `null` wherever any kind is expected.
    #[serde(default)]
    pub allow_null: bool,

    /// Let an expected `number` accept integral values.
    #[serde(default = "default_integer_as_number")]
    pub integer_as_number: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn to_options(&self) -> CheckOptions {
        CheckOptions {
            allow_null: self.allow_null,
            integer_as_number: self.integer_as_number,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            allow_null: false,
            integer_as_number: default_integer_as_number(),
        }
    }
}

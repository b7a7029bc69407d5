//! Serde roundtrip and JsonSchema validation tests for reports and kinds.

use dtype_core::{CoreError, DataKind, DataTypeError, ErrorReport};
use pretty_assertions::assert_eq;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    default_report_roundtrip,
    ErrorReport,
    DataTypeError::new().report()
);

roundtrip_and_validate!(
    kind_report_roundtrip,
    ErrorReport,
    DataKind::Object.mismatch().report()
);

roundtrip_and_validate!(
    validation_report_roundtrip,
    ErrorReport,
    ErrorReport::from(&CoreError::Validation("bad".into()))
);

roundtrip_and_validate!(kind_roundtrip, DataKind, DataKind::Integer);

#[test]
fn report_json_shape() {
    let json = serde_json::to_value(DataTypeError::new().report()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "DataTypeError",
            "message": "The data type of the passed value is invalid.",
        })
    );
}

#[test]
fn report_schema_requires_both_fields() {
    let schema = serde_json::to_value(schema_for!(ErrorReport)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!({"name": "DataTypeError"}));
    assert!(!errors.is_empty());
}

#[test]
fn kind_schema_rejects_unknown_kind() {
    let schema = serde_json::to_value(schema_for!(DataKind)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!("tuple"));
    assert!(!errors.is_empty());
}

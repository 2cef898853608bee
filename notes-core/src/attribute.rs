//! Conversion of serializable values into DynamoDB attribute maps.

use crate::IngestError;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub use aws_sdk_dynamodb::types::AttributeValue;

/// A storage-native item: attribute name to attribute value.
pub type Item = HashMap<String, AttributeValue>;

/// Convert `value` into an [`Item`].
///
/// `value` must serialize to a map with string keys, otherwise this fails with
/// [`IngestError::SerializationFailed`].
pub fn to_item<T>(value: &T) -> Result<Item, IngestError>
where
    T: Serialize,
{
    match serde_json::to_value(value).map_err(|e| IngestError::SerializationFailed(e.to_string()))? {
        Value::Object(fields) => Ok(fields.into_iter().map(|(k, v)| (k, to_attribute(v))).collect()),
        _ => Err(IngestError::SerializationFailed(
            "item must serialize to a map of attributes".to_string(),
        )),
    }
}

/// Convert a single JSON value into its attribute representation.
pub fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => AttributeValue::L(items.into_iter().map(to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(fields.into_iter().map(|(k, v)| (k, to_attribute(v))).collect()),
    }
}

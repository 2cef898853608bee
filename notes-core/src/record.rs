//! Note records and the inbound payload they are built from.

use crate::IngestError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A persisted note.
///
/// Serialized field names are the attribute names stored in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    /// Server-generated UUID, unique per ingestion.
    pub note_id: String,
    /// Caller identity as resolved by the platform boundary.
    pub user_id: String,
    /// Free-form note fields.
    pub content: HashMap<String, String>,
    /// Attachment metadata.
    pub attachment: HashMap<String, String>,
    /// Unix timestamp, in seconds, of record construction.
    pub created_at: i64,
}

/// One inbound ingestion: the untouched body plus the trusted caller identity.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionRequest {
    body: Vec<u8>,
    identity: String,
}

impl IngestionRequest {
    /// Pair a raw body with the identity the platform resolved for it.
    pub fn new(body: impl Into<Vec<u8>>, identity: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            identity: identity.into(),
        }
    }

    /// Raw body bytes, exactly as received.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Caller identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Split into body and identity.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.body, self.identity)
    }
}

/// The accepted shape of a request body.
///
/// Both fields are optional. Anything else in the body, including a
/// client-supplied `userId`, is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBody {
    /// `content` mapping, empty when absent.
    pub content: HashMap<String, String>,
    /// `attachment` mapping, empty when absent.
    pub attachment: HashMap<String, String>,
}

impl NoteBody {
    /// Parse a raw request body.
    ///
    /// The body must be valid JSON holding an object (or `null`, read as an
    /// empty object). Individual fields are lenient: a missing or non-object
    /// `content`/`attachment` becomes an empty map and non-string entries are
    /// dropped.
    pub fn from_slice(raw: &[u8]) -> Result<Self, IngestError> {
        let value: Value = serde_json::from_slice(raw).map_err(|e| IngestError::MalformedBody(e.to_string()))?;
        let mut fields = match value {
            Value::Object(fields) => fields,
            Value::Null => Map::new(),
            other => {
                return Err(IngestError::MalformedBody(format!(
                    "expected a JSON object, found {}",
                    json_type(&other)
                )))
            }
        };

        Ok(NoteBody {
            content: string_map("content", fields.remove("content")),
            attachment: string_map("attachment", fields.remove("attachment")),
        })
    }
}

fn string_map(field: &str, value: Option<Value>) -> HashMap<String, String> {
    match value {
        Some(Value::Object(entries)) => entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                other => {
                    tracing::debug!(field, key = %key, kind = json_type(&other), "dropping non-string entry");
                    None
                }
            })
            .collect(),
        None | Some(Value::Null) => HashMap::new(),
        Some(other) => {
            tracing::debug!(field, kind = json_type(&other), "ignoring non-object field");
            HashMap::new()
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn parses_content_and_attachment() {
        let body = NoteBody::from_slice(br#"{"content":{"title":"hi"},"attachment":{"key":"a.png"}}"#)
            .expect("failed to parse body");
        assert_eq!(body.content, hashmap! { "title".to_string() => "hi".to_string() });
        assert_eq!(body.attachment, hashmap! { "key".to_string() => "a.png".to_string() });
    }

    #[test]
    fn missing_fields_default_to_empty() {
        assert_eq!(NoteBody::from_slice(b"{}").expect("failed to parse body"), NoteBody::default());
        assert_eq!(NoteBody::from_slice(b"null").expect("failed to parse body"), NoteBody::default());
    }

    #[test]
    fn lenient_fields() {
        let body = NoteBody::from_slice(br#"{"content":{"title":"hi","n":1,"tags":["a"]},"attachment":"nope"}"#)
            .expect("failed to parse body");
        assert_eq!(body.content, hashmap! { "title".to_string() => "hi".to_string() });
        assert!(body.attachment.is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let cases: [&[u8]; 4] = [b"", b"{", b"not json", br#"{"content":}"#];
        for raw in cases.iter() {
            match NoteBody::from_slice(raw) {
                Err(IngestError::MalformedBody(_)) => {}
                other => panic!("expected malformed body for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn rejects_non_object_json() {
        match NoteBody::from_slice(b"[1,2]") {
            Err(IngestError::MalformedBody(detail)) => assert!(detail.contains("an array")),
            other => panic!("expected malformed body, got {:?}", other),
        }
    }

    #[test]
    fn record_serializes_with_attribute_names() {
        let record = NoteRecord {
            note_id: "n-1".into(),
            user_id: "u-1".into(),
            content: HashMap::new(),
            attachment: HashMap::new(),
            created_at: 1_600_000_000,
        };
        assert_eq!(
            serde_json::to_value(&record).expect("failed to serialize record"),
            serde_json::json!({
                "noteId": "n-1",
                "userId": "u-1",
                "content": {},
                "attachment": {},
                "createdAt": 1_600_000_000
            })
        );
    }
}

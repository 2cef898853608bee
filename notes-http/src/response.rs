//! Response types

use aws_lambda_events::encodings::Body;
use http::{
    header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    response::Builder,
    Response, StatusCode,
};
use notes_core::{IngestError, Ingested};
use serde_json::json;

/// Start a response carrying the headers every path emits.
pub fn builder(status: StatusCode) -> Builder {
    Response::builder()
        .status(status)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .header(CONTENT_TYPE, "application/json")
}

/// Map an ingestion outcome to the response returned to the caller.
///
/// A committed note echoes the original request body with status 200.
/// Failures carry `{"code": .., "message": ..}` with the status of the error.
pub fn from_outcome(outcome: Result<Ingested, IngestError>) -> Response<Body> {
    match outcome {
        Ok(ingested) => success(ingested.body),
        Err(err) => failure(&err),
    }
}

fn success(body: Vec<u8>) -> Response<Body> {
    let body = match String::from_utf8(body) {
        Ok(text) => Body::from(text),
        Err(e) => Body::from(e.into_bytes()),
    };
    builder(StatusCode::OK)
        .body(body)
        .expect("unable to build http::Response")
}

fn failure(err: &IngestError) -> Response<Body> {
    let body = json!({
        "code": err.code(),
        "message": err.to_string(),
    });
    builder(err.status())
        .body(Body::from(body.to_string()))
        .expect("unable to build http::Response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::NoteRecord;
    use std::collections::HashMap;

    fn ingested(body: &str) -> Ingested {
        Ingested {
            record: NoteRecord {
                note_id: "n-1".into(),
                user_id: "user-123".into(),
                content: HashMap::new(),
                attachment: HashMap::new(),
                created_at: 1_600_000_000,
            },
            body: body.as_bytes().to_vec(),
        }
    }

    fn assert_common_headers(response: &Response<Body>) {
        let header = |name| {
            response
                .headers()
                .get(name)
                .map(|h| h.to_str().expect("invalid header"))
        };
        assert_eq!(header(ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert_eq!(header(ACCESS_CONTROL_ALLOW_CREDENTIALS), Some("true"));
        assert_eq!(header(CONTENT_TYPE), Some("application/json"));
    }

    fn json_body(response: &Response<Body>) -> serde_json::Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).expect("invalid json body"),
            _ => panic!("invalid body"),
        }
    }

    #[test]
    fn success_echoes_request_body() {
        let raw = r#"{"content":{"title":"hi"},  "attachment":{}}"#;
        let response = from_outcome(Ok(ingested(raw)));
        assert_eq!(response.status(), StatusCode::OK);
        assert_common_headers(&response);
        match response.body() {
            Body::Text(text) => assert_eq!(text, raw),
            _ => panic!("invalid body"),
        }
    }

    #[test]
    fn storage_failure_response() {
        let response = from_outcome(Err(IngestError::StorageWriteFailed("table not found".into())));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_common_headers(&response);
        let body = json_body(&response);
        assert_eq!(body["code"], "storage_write_failed");
        assert_eq!(body["message"], "Error adding item to table: table not found");
    }

    #[test]
    fn serialization_failure_response() {
        let response = from_outcome(Err(IngestError::SerializationFailed("bad key".into())));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_common_headers(&response);
        assert_eq!(json_body(&response)["code"], "serialization_failed");
    }

    #[test]
    fn client_error_responses() {
        let response = from_outcome(Err(IngestError::MalformedBody("EOF while parsing".into())));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_common_headers(&response);
        assert_eq!(json_body(&response)["code"], "malformed_body");

        let response = from_outcome(Err(IngestError::MissingIdentity));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_common_headers(&response);
        assert_eq!(json_body(&response)["code"], "missing_identity");
    }
}

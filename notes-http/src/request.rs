//! API Gateway request adaptations
//!
//! The caller identity is taken from the request context the platform
//! attached to the event, never from the body.
use lamedh_http::{request::RequestContext, Request};
use notes_core::IngestionRequest;

/// Resolve the caller identity of an API Gateway request.
///
/// Only REST API (v1) proxy events carry a Cognito identity. HTTP API (v2)
/// and ALB events resolve to `None`, as do v1 events without one.
pub fn caller_identity(request: &Request) -> Option<String> {
    match request.extensions().get::<RequestContext>() {
        Some(RequestContext::ApiGatewayV1(ctx)) => ctx
            .identity
            .cognito_identity_id
            .clone()
            .filter(|id| !id.trim().is_empty()),
        Some(RequestContext::ApiGatewayV2(_)) | Some(RequestContext::Alb(_)) | None => None,
    }
}

/// Build the [`IngestionRequest`] for `request`.
///
/// An unresolved identity becomes an empty one, which ingestion rejects.
pub fn ingestion_request(request: &Request) -> IngestionRequest {
    let body: &[u8] = request.body().as_ref();
    IngestionRequest::new(body, caller_identity(request).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::encodings::Body;
    use lamedh_http::request::from_str;

    #[test]
    fn resolves_cognito_identity() {
        let request = from_str(include_str!("../tests/data/apigw_proxy_request.json"))
            .expect("failed to deserialize apigw proxy request");
        assert_eq!(
            caller_identity(&request).as_deref(),
            Some("ap-southeast-2:3f1c8a52-7d4e-4b8a-9a1e-2c6f0b5d9e71")
        );
    }

    #[test]
    fn keeps_body_verbatim() {
        let request = from_str(include_str!("../tests/data/apigw_proxy_request.json"))
            .expect("failed to deserialize apigw proxy request");
        let ingestion = ingestion_request(&request);
        assert_eq!(
            ingestion.body(),
            &br#"{"content":{"title":"hi"},"attachment":{},"userId":"spoofed"}"#[..]
        );
        assert_eq!(ingestion.identity(), "ap-southeast-2:3f1c8a52-7d4e-4b8a-9a1e-2c6f0b5d9e71");
    }

    #[test]
    fn other_origins_have_no_identity() {
        for event in [
            include_str!("../tests/data/apigw_proxy_request_unauthenticated.json"),
            include_str!("../tests/data/apigw_v2_proxy_request.json"),
            include_str!("../tests/data/alb_request.json"),
        ]
        .iter()
        {
            let request = from_str(event).expect("failed to deserialize event");
            assert!(request.extensions().get::<RequestContext>().is_some());
            assert_eq!(caller_identity(&request), None);
        }
    }

    #[test]
    fn missing_context_has_no_identity() {
        let request = http::Request::builder()
            .body(Body::from("{}"))
            .expect("failed to build request");
        assert_eq!(caller_identity(&request), None);
        assert_eq!(ingestion_request(&request).identity(), "");
    }
}

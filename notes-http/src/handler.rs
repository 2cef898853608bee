use crate::{request::ingestion_request, response};
use aws_lambda_events::encodings::Body;
use http::Response;
use lamedh_http::{
    lambda::{Context, Error},
    Handler, Request,
};
use notes_core::Ingestor;
use std::{future::Future, pin::Pin, sync::Arc};
use tracing::Instrument;

/// Lambda HTTP handler sharing one [`Ingestor`] across invocations.
#[derive(Debug, Clone)]
pub struct NotesHandler {
    ingestor: Arc<Ingestor>,
}

impl NotesHandler {
    /// Create a handler around a long-lived ingestor.
    pub fn new(ingestor: Arc<Ingestor>) -> Self {
        Self { ingestor }
    }
}

impl Handler for NotesHandler {
    type Response = Response<Body>;
    type Error = Error;
    type Fut = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn call(&mut self, request: Request, context: Context) -> Self::Fut {
        let ingestor = Arc::clone(&self.ingestor);
        let span = tracing::info_span!("ingest", request_id = %context.request_id);
        Box::pin(async move { Ok::<_, Error>(respond(&ingestor, request).await) }.instrument(span))
    }
}

/// Ingest one HTTP request and build its response.
///
/// Every ingestion failure becomes an error response. Nothing here fails
/// the invocation itself.
pub async fn respond(ingestor: &Ingestor, request: Request) -> Response<Body> {
    let outcome = ingestor.ingest(ingestion_request(&request)).await;
    response::from_outcome(outcome)
}

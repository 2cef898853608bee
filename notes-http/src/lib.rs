#![deny(missing_docs)]
//! AWS Lambda adapter for the notes ingestion service.
//!
//! Turns API Gateway proxy events into [`notes_core::IngestionRequest`]s and
//! ingestion outcomes back into HTTP responses. The `bootstrap` binary wires
//! a [`NotesHandler`] into the Lambda runtime:
//!
//! ```rust,no_run
//! use lamedh_http::{handler, lambda::{self, Error}};
//! use notes_core::{store::MemoryNoteStore, Ingestor, NotesConfig};
//! use notes_http::NotesHandler;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let ingestor = Ingestor::new(Arc::new(MemoryNoteStore::default()), &NotesConfig::default());
//!     lambda::run(handler(NotesHandler::new(Arc::new(ingestor)))).await
//! }
//! ```

mod handler;
pub mod request;
pub mod response;

pub use crate::handler::{respond, NotesHandler};

use tracing_subscriber::EnvFilter;

/// Install the process-wide `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Timestamps are left
/// out since CloudWatch records its own.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .init();
}

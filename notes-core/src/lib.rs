#![deny(missing_docs)]
//! Core of the notes ingestion service.
//!
//! An [`Ingestor`] takes an [`IngestionRequest`] (raw body bytes plus a caller
//! identity resolved by the platform), normalizes the body into a
//! [`NoteRecord`] and writes it through a [`NoteStore`].
//!
//! ```rust,no_run
//! use notes_core::{store::MemoryNoteStore, IngestionRequest, Ingestor, NotesConfig};
//! use std::sync::Arc;
//!
//! # async fn doc() -> Result<(), notes_core::IngestError> {
//! let ingestor = Ingestor::new(Arc::new(MemoryNoteStore::default()), &NotesConfig::default());
//! let ingested = ingestor
//!     .ingest(IngestionRequest::new(r#"{"content":{"title":"hi"}}"#, "user-123"))
//!     .await?;
//! println!("stored {}", ingested.record.note_id);
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod config;
mod error;
mod ingest;
pub mod record;
pub mod store;

pub use crate::{
    config::NotesConfig,
    error::{ErrorKind, IngestError, StoreError},
    ingest::{Clock, Ingested, Ingestor, SystemClock},
    record::{IngestionRequest, NoteBody, NoteRecord},
    store::NoteStore,
};

use crate::{
    attribute, IngestError, IngestionRequest, NoteBody, NoteRecord, NoteStore, NotesConfig, StoreError,
};
use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};
use uuid::Uuid;

/// Source of `createdAt` timestamps.
pub trait Clock: Send + Sync {
    /// Current unix time in seconds.
    fn now(&self) -> i64;
}

/// Wall-clock [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Result of a committed ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    /// The record as written.
    pub record: NoteRecord,
    /// The request body, untouched. This is what gets echoed to the caller.
    pub body: Vec<u8>,
}

/// Validates, normalizes and persists note records.
///
/// One `Ingestor` is built at startup and shared by every invocation. It
/// holds no per-request state. Each call mints its own `noteId`, so a
/// retried request produces a second record rather than overwriting the
/// first.
pub struct Ingestor {
    store: Arc<dyn NoteStore>,
    table_name: String,
    write_timeout: Duration,
    clock: Box<dyn Clock>,
    last_created_at: AtomicI64,
}

impl Ingestor {
    /// Create an ingestor writing to `store` with the table and timeout from `config`.
    pub fn new(store: Arc<dyn NoteStore>, config: &NotesConfig) -> Self {
        Self {
            store,
            table_name: config.table_name.clone(),
            write_timeout: config.write_timeout,
            clock: Box::new(SystemClock),
            last_created_at: AtomicI64::new(i64::MIN),
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock<C>(mut self, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// Table records are written to.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Ingest one request.
    ///
    /// Nothing is written unless the identity is present and the body parses.
    /// No step is retried. If the returned future is dropped while the write
    /// is in flight, the record may or may not have been stored.
    ///
    /// [`IngestError::SerializationFailed`] is unreachable for a
    /// [`NoteRecord`], whose fields always convert to attributes. It stays in
    /// the error type since [`attribute::to_item`] is fallible in general.
    pub async fn ingest(&self, request: IngestionRequest) -> Result<Ingested, IngestError> {
        tracing::debug!(body_len = request.body().len(), "received note");
        let result = self.try_ingest(request).await;
        match &result {
            Ok(ingested) => tracing::info!(
                note_id = %ingested.record.note_id,
                user_id = %ingested.record.user_id,
                created_at = ingested.record.created_at,
                "note committed"
            ),
            Err(e) if e.kind() == crate::ErrorKind::Client => tracing::warn!(code = e.code(), "rejected note: {}", e),
            Err(e) => tracing::error!(code = e.code(), "failed to store note: {}", e),
        }
        result
    }

    async fn try_ingest(&self, request: IngestionRequest) -> Result<Ingested, IngestError> {
        let (body, identity) = request.into_parts();
        if identity.trim().is_empty() {
            return Err(IngestError::MissingIdentity);
        }

        let NoteBody { content, attachment } = NoteBody::from_slice(&body)?;
        let record = NoteRecord {
            note_id: Uuid::new_v4().to_string(),
            user_id: identity,
            content,
            attachment,
            created_at: self.created_at(),
        };

        let item = attribute::to_item(&record)?;
        match tokio::time::timeout(self.write_timeout, self.store.put_record(&self.table_name, item)).await {
            Ok(written) => written?,
            Err(_) => return Err(StoreError::Timeout(self.write_timeout).into()),
        }

        Ok(Ingested { record, body })
    }

    // never below a value already handed out
    fn created_at(&self) -> i64 {
        let now = self.clock.now();
        self.last_created_at.fetch_max(now, Ordering::SeqCst).max(now)
    }
}

impl std::fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ingestor")
            .field("table_name", &self.table_name)
            .field("write_timeout", &self.write_timeout)
            .finish()
    }
}

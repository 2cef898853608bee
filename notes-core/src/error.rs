use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a single ingestion.
///
/// Every variant is terminal for the call. Nothing is retried.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The platform boundary did not supply a caller identity.
    #[error("caller identity is missing")]
    MissingIdentity,

    /// The request body is not a JSON object.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// The record could not be converted into storage attributes.
    #[error("Error creating dynamodb attribute value from item: {0}")]
    SerializationFailed(String),

    /// The storage collaborator rejected or failed the write.
    #[error("Error adding item to table: {0}")]
    StorageWriteFailed(String),
}

/// Which side of the boundary an [`IngestError`] is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself is unacceptable.
    Client,
    /// The request was fine but the service could not complete it.
    Server,
}

impl IngestError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::MissingIdentity => "missing_identity",
            IngestError::MalformedBody(_) => "malformed_body",
            IngestError::SerializationFailed(_) => "serialization_failed",
            IngestError::StorageWriteFailed(_) => "storage_write_failed",
        }
    }

    /// Client or server attribution.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IngestError::MissingIdentity | IngestError::MalformedBody(_) => ErrorKind::Client,
            IngestError::SerializationFailed(_) | IngestError::StorageWriteFailed(_) => ErrorKind::Server,
        }
    }

    /// HTTP status reported for this error.
    ///
    /// Serialization failures answer 404 and storage failures 400. Existing
    /// clients key off these values.
    pub fn status(&self) -> StatusCode {
        match self {
            IngestError::MissingIdentity => StatusCode::UNAUTHORIZED,
            IngestError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            IngestError::SerializationFailed(_) => StatusCode::NOT_FOUND,
            IngestError::StorageWriteFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Errors from a [`NoteStore`](crate::NoteStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the write or could not be reached.
    #[error("{0}")]
    Backend(String),

    /// The write did not complete within the configured timeout.
    #[error("write timed out after {0:?}")]
    Timeout(Duration),
}

impl From<StoreError> for IngestError {
    fn from(err: StoreError) -> Self {
        IngestError::StorageWriteFailed(err.to_string())
    }
}

use lamedh_http::{
    handler,
    lambda::{self, Error},
};
use notes_core::{store::DynamoNoteStore, Ingestor, NotesConfig};
use notes_http::NotesHandler;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    notes_http::init_tracing();

    let config = NotesConfig::from_env()?;
    // one client for the lifetime of the process
    let store = DynamoNoteStore::new(&config).await;
    let ingestor = Ingestor::new(Arc::new(store), &config);
    tracing::info!(table = ingestor.table_name(), region = %config.region, "notes ingestion ready");

    lambda::run(handler(NotesHandler::new(Arc::new(ingestor)))).await
}

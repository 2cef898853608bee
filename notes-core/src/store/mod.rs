//! Storage collaborators for note records.

use crate::{attribute::Item, StoreError};
use async_trait::async_trait;

mod dynamo;
mod memory;

pub use dynamo::{build_client, DynamoNoteStore};
pub use memory::MemoryNoteStore;

/// A key-value table offering atomic single-item writes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Write `item` into `table_name`, replacing any item with the same key.
    async fn put_record(&self, table_name: &str, item: Item) -> Result<(), StoreError>;
}

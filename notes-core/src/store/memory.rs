use crate::{attribute::Item, NoteStore, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

/// In-process [`NoteStore`] keyed by table name and `noteId`.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    tables: Mutex<HashMap<String, HashMap<String, Item>>>,
}

impl MemoryNoteStore {
    /// Snapshot of every item in `table_name`, keyed by `noteId`.
    pub fn items(&self, table_name: &str) -> HashMap<String, Item> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(table_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of items in `table_name`.
    pub fn len(&self, table_name: &str) -> usize {
        self.items(table_name).len()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn put_record(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        let key = match item.get("noteId") {
            Some(AttributeValue::S(id)) => id.clone(),
            _ => return Err(StoreError::Backend("item is missing the noteId key".to_string())),
        };
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| StoreError::Backend("memory store poisoned".to_string()))?;
        tables.entry(table_name.to_string()).or_default().insert(key, item);
        Ok(())
    }
}

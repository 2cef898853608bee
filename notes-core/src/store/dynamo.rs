use crate::{attribute::Item, NoteStore, NotesConfig, StoreError};
use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, Client};

/// DynamoDB-backed [`NoteStore`] issuing one `PutItem` per record.
#[derive(Debug, Clone)]
pub struct DynamoNoteStore {
    client: Client,
}

impl DynamoNoteStore {
    /// Build a store with a fresh client for `config`.
    pub async fn new(config: &NotesConfig) -> Self {
        Self::from_client(build_client(config).await)
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoteStore for DynamoNoteStore {
    async fn put_record(&self, table_name: &str, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}

/// Build a DynamoDB client from the ambient AWS environment.
///
/// The region comes from `config`, and `endpoint_url` (if set) points the
/// client at a local DynamoDB.
pub async fn build_client(config: &NotesConfig) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    Client::new(&loader.load().await)
}

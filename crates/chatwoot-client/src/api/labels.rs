//! Labels API.

use crate::client::{ChatwootClient, Credential};
use crate::error::Result;
use crate::types::AddLabelsRequest;

/// Labels API client.
///
/// All calls require an agent token.
pub struct LabelsApi {
    client: ChatwootClient,
}

impl LabelsApi {
    pub(crate) fn new(client: ChatwootClient) -> Self {
        Self { client }
    }

    /// Attach labels to a conversation.
    ///
    /// Duplicates are passed through as given.
    pub async fn add_many(&self, conversation_id: u64, labels: Vec<String>) -> Result<()> {
        self.client
            .post_no_content(
                "add_labels",
                Credential::Agent,
                &format!("conversations/{}/labels", conversation_id),
                &AddLabelsRequest { labels },
            )
            .await
    }

    /// Attach a single label to a conversation.
    pub async fn add(&self, conversation_id: u64, label: impl Into<String>) -> Result<()> {
        self.add_many(conversation_id, vec![label.into()]).await
    }
}

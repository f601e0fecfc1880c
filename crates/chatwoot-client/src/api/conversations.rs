//! Conversations API.

use crate::client::{ChatwootClient, Credential};
use crate::error::Result;
use crate::types::{Conversation, CreateConversationRequest};

/// Conversations API client.
pub struct ConversationsApi {
    client: ChatwootClient,
}

impl ConversationsApi {
    pub(crate) fn new(client: ChatwootClient) -> Self {
        Self { client }
    }

    /// Start a conversation.
    pub async fn create(&self, request: CreateConversationRequest) -> Result<Conversation> {
        self.client
            .post("create_conversation", Credential::Bot, "conversations", &request)
            .await
    }
}

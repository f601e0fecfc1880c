//! Messages API.

use crate::client::{ChatwootClient, Credential};
use crate::error::Result;
use crate::types::{CreateMessageRequest, GetMessagesResponse, Message};

/// Messages API client.
pub struct MessagesApi {
    client: ChatwootClient,
}

impl MessagesApi {
    pub(crate) fn new(client: ChatwootClient) -> Self {
        Self { client }
    }

    /// List the messages of a conversation in server order.
    ///
    /// Requires an agent token.
    pub async fn list(&self, conversation_id: u64) -> Result<Vec<Message>> {
        Ok(self.list_with_meta(conversation_id).await?.payload)
    }

    /// List messages together with the listing metadata.
    pub async fn list_with_meta(&self, conversation_id: u64) -> Result<GetMessagesResponse> {
        self.client
            .get(
                "get_messages",
                Credential::Agent,
                &format!("conversations/{}/messages", conversation_id),
            )
            .await
    }

    /// Post a message to a conversation.
    pub async fn create(
        &self,
        conversation_id: u64,
        request: CreateMessageRequest,
    ) -> Result<Message> {
        self.client
            .post(
                "create_message",
                Credential::Bot,
                &format!("conversations/{}/messages", conversation_id),
                &request,
            )
            .await
    }

    /// Post a public outgoing message.
    pub async fn create_outgoing(
        &self,
        conversation_id: u64,
        content: impl Into<String>,
    ) -> Result<Message> {
        let request = CreateMessageRequest::outgoing(content, false);
        self.create(conversation_id, request).await
    }

    /// Post a private outgoing note.
    pub async fn create_outgoing_private(
        &self,
        conversation_id: u64,
        content: impl Into<String>,
    ) -> Result<Message> {
        let request = CreateMessageRequest::outgoing(content, true);
        self.create(conversation_id, request).await
    }

    /// Post a public incoming message.
    pub async fn create_incoming(
        &self,
        conversation_id: u64,
        content: impl Into<String>,
    ) -> Result<Message> {
        let request = CreateMessageRequest::incoming(content, false);
        self.create(conversation_id, request).await
    }

    /// Post a private incoming message.
    pub async fn create_incoming_private(
        &self,
        conversation_id: u64,
        content: impl Into<String>,
    ) -> Result<Message> {
        let request = CreateMessageRequest::incoming(content, true);
        self.create(conversation_id, request).await
    }
}

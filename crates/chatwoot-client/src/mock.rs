//! No-op client for tests.

use async_trait::async_trait;

use crate::api::ChatwootApi;
use crate::error::Result;
use crate::types::{
    Conversation, CreateContactRequest, CreateContactResponse, CreateConversationRequest,
    CreateMessageRequest, Message,
};

/// Stand-in for [`ChatwootClient`](crate::ChatwootClient) that never touches
/// the network.
///
/// Every operation succeeds and returns the zero value of its result type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockChatwootClient;

impl MockChatwootClient {
    /// Create a mock client.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatwootApi for MockChatwootClient {
    async fn create_contact(
        &self,
        _request: CreateContactRequest,
    ) -> Result<CreateContactResponse> {
        Ok(CreateContactResponse::default())
    }

    async fn create_conversation(
        &self,
        _request: CreateConversationRequest,
    ) -> Result<Conversation> {
        Ok(Conversation::default())
    }

    async fn get_messages(&self, _conversation_id: u64) -> Result<Vec<Message>> {
        Ok(Vec::new())
    }

    async fn create_message(
        &self,
        _conversation_id: u64,
        _request: CreateMessageRequest,
    ) -> Result<Message> {
        Ok(Message::default())
    }

    async fn add_labels(&self, _conversation_id: u64, _labels: Vec<String>) -> Result<()> {
        Ok(())
    }

    async fn assign(&self, _conversation_id: u64, _assignee_id: u64) -> Result<()> {
        Ok(())
    }

    async fn assign_team(&self, _conversation_id: u64, _team_id: u64) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConversationStatus, MessageType};

    #[tokio::test]
    async fn test_mock_returns_zero_values() {
        let mock = MockChatwootClient::new();

        let contact = mock
            .create_contact(CreateContactRequest::new(1))
            .await
            .unwrap();
        assert_eq!(contact, CreateContactResponse::default());

        let conversation = mock
            .create_conversation(CreateConversationRequest {
                status: Some(ConversationStatus::Open),
                ..CreateConversationRequest::new("src", 1)
            })
            .await
            .unwrap();
        assert_eq!(conversation, Conversation::default());

        assert!(mock.get_messages(9).await.unwrap().is_empty());

        let message = mock
            .create_message(
                9,
                CreateMessageRequest::new("hi", MessageType::Outgoing, false),
            )
            .await
            .unwrap();
        assert_eq!(message, Message::default());
    }

    #[tokio::test]
    async fn test_mock_shorthands_succeed() {
        let mock = MockChatwootClient::new();

        for message in [
            mock.create_outgoing_message(1, "a").await.unwrap(),
            mock.create_outgoing_private_message(1, "b").await.unwrap(),
            mock.create_incoming_message(1, "c").await.unwrap(),
            mock.create_incoming_private_message(1, "d").await.unwrap(),
        ] {
            assert_eq!(message, Message::default());
        }

        mock.add_label(1, "vip").await.unwrap();
        mock.add_labels(1, vec!["a".to_string(), "a".to_string()])
            .await
            .unwrap();
        mock.assign(1, 2).await.unwrap();
        mock.assign_team(1, 3).await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_usable_as_trait_object() {
        let client: std::sync::Arc<dyn ChatwootApi> = std::sync::Arc::new(MockChatwootClient);
        assert!(client.get_messages(1).await.unwrap().is_empty());
    }
}

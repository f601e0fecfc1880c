//! API endpoint implementations.

mod assignments;
mod contacts;
mod conversations;
mod labels;
mod messages;

use async_trait::async_trait;

use crate::client::ChatwootClient;
use crate::error::Result;
use crate::types::{
    Conversation, CreateContactRequest, CreateContactResponse, CreateConversationRequest,
    CreateMessageRequest, Message,
};

pub use assignments::AssignmentsApi;
pub use contacts::ContactsApi;
pub use conversations::ConversationsApi;
pub use labels::LabelsApi;
pub use messages::MessagesApi;

/// The Chatwoot operation set.
///
/// Write code that talks to Chatwoot against this trait so it can run
/// with [`ChatwootClient`] in production and
/// [`MockChatwootClient`](crate::MockChatwootClient) in tests.
///
/// The message shorthands and [`add_label`](ChatwootApi::add_label) are
/// provided in terms of [`create_message`](ChatwootApi::create_message) and
/// [`add_labels`](ChatwootApi::add_labels).
#[async_trait]
pub trait ChatwootApi: Send + Sync {
    /// Create a contact in an inbox.
    async fn create_contact(&self, request: CreateContactRequest) -> Result<CreateContactResponse>;

    /// Start a conversation.
    async fn create_conversation(&self, request: CreateConversationRequest) -> Result<Conversation>;

    /// List the messages of a conversation in server order.
    async fn get_messages(&self, conversation_id: u64) -> Result<Vec<Message>>;

    /// Post a message to a conversation.
    async fn create_message(
        &self,
        conversation_id: u64,
        request: CreateMessageRequest,
    ) -> Result<Message>;

    /// Attach labels to a conversation.
    async fn add_labels(&self, conversation_id: u64, labels: Vec<String>) -> Result<()>;

    /// Assign a conversation to an agent.
    async fn assign(&self, conversation_id: u64, assignee_id: u64) -> Result<()>;

    /// Assign a conversation to a team.
    async fn assign_team(&self, conversation_id: u64, team_id: u64) -> Result<()>;

    /// Post a public outgoing message.
    async fn create_outgoing_message(
        &self,
        conversation_id: u64,
        content: &str,
    ) -> Result<Message> {
        let request = CreateMessageRequest::outgoing(content, false);
        self.create_message(conversation_id, request).await
    }

    /// Post a private outgoing note.
    async fn create_outgoing_private_message(
        &self,
        conversation_id: u64,
        content: &str,
    ) -> Result<Message> {
        let request = CreateMessageRequest::outgoing(content, true);
        self.create_message(conversation_id, request).await
    }

    /// Post a public incoming message.
    async fn create_incoming_message(
        &self,
        conversation_id: u64,
        content: &str,
    ) -> Result<Message> {
        let request = CreateMessageRequest::incoming(content, false);
        self.create_message(conversation_id, request).await
    }

    /// Post a private incoming message.
    async fn create_incoming_private_message(
        &self,
        conversation_id: u64,
        content: &str,
    ) -> Result<Message> {
        let request = CreateMessageRequest::incoming(content, true);
        self.create_message(conversation_id, request).await
    }

    /// Attach a single label to a conversation.
    async fn add_label(&self, conversation_id: u64, label: &str) -> Result<()> {
        let labels = vec![label.to_string()];
        self.add_labels(conversation_id, labels).await
    }
}

#[async_trait]
impl ChatwootApi for ChatwootClient {
    async fn create_contact(&self, request: CreateContactRequest) -> Result<CreateContactResponse> {
        self.contacts().create(request).await
    }

    async fn create_conversation(
        &self,
        request: CreateConversationRequest,
    ) -> Result<Conversation> {
        self.conversations().create(request).await
    }

    async fn get_messages(&self, conversation_id: u64) -> Result<Vec<Message>> {
        self.messages().list(conversation_id).await
    }

    async fn create_message(
        &self,
        conversation_id: u64,
        request: CreateMessageRequest,
    ) -> Result<Message> {
        self.messages().create(conversation_id, request).await
    }

    async fn add_labels(&self, conversation_id: u64, labels: Vec<String>) -> Result<()> {
        self.labels().add_many(conversation_id, labels).await
    }

    async fn assign(&self, conversation_id: u64, assignee_id: u64) -> Result<()> {
        self.assignments().agent(conversation_id, assignee_id).await
    }

    async fn assign_team(&self, conversation_id: u64, team_id: u64) -> Result<()> {
        self.assignments().team(conversation_id, team_id).await
    }
}

//! Assignments API.

use crate::client::{ChatwootClient, Credential};
use crate::error::Result;
use crate::types::AssignmentRequest;

/// Assignments API client.
///
/// All calls require an agent token.
pub struct AssignmentsApi {
    client: ChatwootClient,
}

impl AssignmentsApi {
    pub(crate) fn new(client: ChatwootClient) -> Self {
        Self { client }
    }

    /// Assign a conversation to an agent or a team.
    pub async fn create(&self, conversation_id: u64, request: AssignmentRequest) -> Result<()> {
        let operation = match request {
            AssignmentRequest::Agent { .. } => "assign",
            AssignmentRequest::Team { .. } => "assign_team",
        };
        self.client
            .post_no_content(
                operation,
                Credential::Agent,
                &format!("conversations/{}/assignments", conversation_id),
                &request,
            )
            .await
    }

    /// Assign a conversation to an agent.
    pub async fn agent(&self, conversation_id: u64, assignee_id: u64) -> Result<()> {
        let request = AssignmentRequest::Agent { assignee_id };
        self.create(conversation_id, request).await
    }

    /// Assign a conversation to a team.
    pub async fn team(&self, conversation_id: u64, team_id: u64) -> Result<()> {
        let request = AssignmentRequest::Team { team_id };
        self.create(conversation_id, request).await
    }
}

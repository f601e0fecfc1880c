//! Contacts API.

use crate::client::{ChatwootClient, Credential};
use crate::error::Result;
use crate::types::{CreateContactRequest, CreateContactResponse};

/// Contacts API client.
pub struct ContactsApi {
    client: ChatwootClient,
}

impl ContactsApi {
    pub(crate) fn new(client: ChatwootClient) -> Self {
        Self { client }
    }

    /// Create a contact. Requires an agent token.
    pub async fn create(&self, request: CreateContactRequest) -> Result<CreateContactResponse> {
        self.client
            .post("create_contact", Credential::Agent, "contacts", &request)
            .await
    }
}

//! Request and response types for the Chatwoot API.
//!
//! These types mirror the JSON shapes of the remote service. Response types
//! are lenient: missing or `null` fields decode to their zero values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;

/// Schema-less attribute map used for fields the service does not pin down.
pub type Attributes = HashMap<String, Value>;

/// Decode `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ─────────────────────────────────────────────────────────────────────────────
// Contacts
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a contact in an inbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactRequest {
    /// Inbox the contact is created in.
    pub inbox_id: u64,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number in E.164 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Avatar upload reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Publicly reachable avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Identifier of the contact in an external system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Free-form custom attributes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_attributes: Attributes,
}

impl CreateContactRequest {
    /// Minimal request for the given inbox.
    pub fn new(inbox_id: u64) -> Self {
        Self {
            inbox_id,
            ..Default::default()
        }
    }
}

/// Response to a contact creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactResponse {
    /// Response payload.
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: ContactPayload,
}

/// Payload wrapper around a created contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// The created contact.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: Contact,
}

/// A contact as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Contact ID.
    pub id: u64,
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Avatar thumbnail URL.
    pub thumbnail: Option<String>,
    /// External identifier.
    pub identifier: Option<String>,
    /// Free-form custom attributes.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_attributes: Attributes,
    /// Inbox associations of this contact.
    #[serde(deserialize_with = "null_as_default")]
    pub contact_inboxes: Vec<ContactInbox>,
}

/// Association between a contact and an inbox.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInbox {
    /// Source ID correlating the contact with a conversation channel.
    #[serde(deserialize_with = "null_as_default")]
    pub source_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversations
// ─────────────────────────────────────────────────────────────────────────────

/// Conversation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Open,
    Resolved,
    Pending,
    Snoozed,
}

/// Request to start a conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateConversationRequest {
    /// Source ID of the contact inbox the conversation belongs to.
    pub source_id: String,
    /// Inbox ID.
    pub inbox_id: u64,
    /// Contact ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
    /// Initial status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
}

impl CreateConversationRequest {
    /// Request for the given contact inbox.
    pub fn new(source_id: impl Into<String>, inbox_id: u64) -> Self {
        Self {
            source_id: source_id.into(),
            inbox_id,
            ..Default::default()
        }
    }
}

/// A created conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    /// Conversation ID.
    pub id: u64,
    /// Owning account.
    pub account_id: u64,
    /// Owning inbox.
    pub inbox_id: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

/// Direction or kind of a message.
///
/// Depending on the server version the field arrives either as text
/// (`"outgoing"`) or as its numeric code (`1`). Both decode to the same
/// variant. Values outside the known set are kept as-is in
/// [`MessageType::Unrecognized`]. Known variants always encode as text.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageType {
    /// Sent by the contact (code 0).
    Incoming,
    /// Sent by an agent or bot (code 1).
    Outgoing,
    /// System activity (code 2).
    Activity,
    /// Template message (code 3).
    Template,
    /// Any other wire value.
    Unrecognized(Value),
}

impl MessageType {
    /// Wire name of a known variant.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            MessageType::Incoming => Some("incoming"),
            MessageType::Outgoing => Some("outgoing"),
            MessageType::Activity => Some("activity"),
            MessageType::Template => Some("template"),
            MessageType::Unrecognized(_) => None,
        }
    }

    fn from_wire(value: Value) -> Self {
        let known = match &value {
            Value::String(s) => match s.as_str() {
                "incoming" => Some(MessageType::Incoming),
                "outgoing" => Some(MessageType::Outgoing),
                "activity" => Some(MessageType::Activity),
                "template" => Some(MessageType::Template),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(0) => Some(MessageType::Incoming),
                Some(1) => Some(MessageType::Outgoing),
                Some(2) => Some(MessageType::Activity),
                Some(3) => Some(MessageType::Template),
                _ => None,
            },
            _ => None,
        };
        known.unwrap_or(MessageType::Unrecognized(value))
    }
}

impl Serialize for MessageType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MessageType::Unrecognized(value) => value.serialize(serializer),
            known => serializer.serialize_str(known.as_str().unwrap_or_default()),
        }
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(MessageType::from_wire)
    }
}

/// Request to post a message to a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    /// Message text.
    pub content: String,
    /// Message direction.
    pub message_type: MessageType,
    /// Whether the message is an internal note hidden from the contact.
    pub private: bool,
}

impl CreateMessageRequest {
    /// Create a message request.
    pub fn new(content: impl Into<String>, message_type: MessageType, private: bool) -> Self {
        Self {
            content: content.into(),
            message_type,
            private,
        }
    }

    /// Outgoing message.
    pub fn outgoing(content: impl Into<String>, private: bool) -> Self {
        Self::new(content, MessageType::Outgoing, private)
    }

    /// Incoming message.
    pub fn incoming(content: impl Into<String>, private: bool) -> Self {
        Self::new(content, MessageType::Incoming, private)
    }
}

/// A message as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Message ID.
    pub id: u64,
    /// Message text.
    pub content: Option<String>,
    /// Content type (`text`, `input_select`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Message direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    /// Whether the message is private.
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    /// Sender details; shape varies by sender kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Attributes>,
}

/// Response for listing the messages of a conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMessagesResponse {
    /// Listing metadata.
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Attributes,
    /// Messages in server order.
    #[serde(deserialize_with = "null_as_default")]
    pub payload: Vec<Message>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Labels and assignments
// ─────────────────────────────────────────────────────────────────────────────

/// Request to attach labels to a conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLabelsRequest {
    /// Labels to attach.
    pub labels: Vec<String>,
}

/// Request to assign a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignmentRequest {
    /// Assign to an agent.
    Agent {
        /// Agent ID.
        assignee_id: u64,
    },
    /// Assign to a team.
    Team {
        /// Team ID.
        team_id: u64,
    },
}

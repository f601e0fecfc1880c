//! Typed HTTP client for the Chatwoot customer-support API.
//!
//! The client covers a fixed set of account-scoped endpoints: creating
//! contacts and conversations, posting and listing messages, attaching
//! labels, and assigning conversations to agents or teams.
//!
//! # Example
//!
//! ```no_run
//! use chatwoot_client::{ChatwootApi, ChatwootClient, CreateConversationRequest, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = ChatwootClient::with_agent_token(
//!     "https://chat.example.com",
//!     1,
//!     "bot-token",
//!     "agent-token",
//! )?;
//!
//! let conversation = client
//!     .create_conversation(CreateConversationRequest::new("source-id", 3))
//!     .await?;
//! client.create_outgoing_message(conversation.id, "Hi there").await?;
//! client.add_label(conversation.id, "new-lead").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Tokens
//!
//! Chatwoot blocks some operations for agent bot tokens. The client sends
//! the bot token for conversation and message writes and the agent token for
//! everything else:
//!
//! - **Bot token**: create conversation, create message (all variants)
//! - **Agent token**: create contact, list messages, labels, assignments
//!
//! Agent-token operations on a client without one fail with
//! [`Error::MissingAgentToken`] and send nothing.
//!
//! # Testing
//!
//! Depend on the [`ChatwootApi`] trait and pass a [`MockChatwootClient`] in
//! tests.

pub mod api;
pub mod client;
pub mod error;
pub mod mock;
pub mod types;

pub use api::ChatwootApi;
pub use client::{ChatwootClient, ClientBuilder, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use mock::MockChatwootClient;
pub use types::*;

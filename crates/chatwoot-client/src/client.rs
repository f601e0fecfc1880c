//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{AssignmentsApi, ContactsApi, ConversationsApi, LabelsApi, MessagesApi};
use crate::error::{Error, Result};

/// Default timeout for requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the access token.
const ACCESS_TOKEN_HEADER: &str = "api_access_token";

/// Content type sent with every request body.
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Which of the two configured tokens a request is sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Credential {
    /// Agent bot token, used for conversation and message writes.
    Bot,
    /// Agent token, used for contacts, message listing, labels and assignments.
    Agent,
}

/// Chatwoot API client.
///
/// Holds the account connection settings and one HTTP handle. Cloning is
/// cheap and all clones share the same settings, which never change after
/// [`ClientBuilder::build`].
///
/// Label and assignment operations, contact creation and message listing are
/// blocked for agent bot tokens by the service, so they need an agent token.
/// Without one they fail with [`Error::MissingAgentToken`] before any request
/// is made.
///
/// # Example
///
/// ```no_run
/// use chatwoot_client::ChatwootClient;
///
/// # async fn example() -> chatwoot_client::Result<()> {
/// let client = ChatwootClient::builder()
///     .base_url("https://chat.example.com")
///     .account_id(1)
///     .bot_token("bot-secret")
///     .agent_token("agent-secret")
///     .build()?;
///
/// client.messages().create_outgoing(42, "Hello!").await?;
/// client.labels().add(42, "support").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ChatwootClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
    /// Account all requests are scoped to.
    account_id: u64,
    /// Agent bot token.
    bot_token: HeaderValue,
    /// Agent token, if configured.
    agent_token: Option<HeaderValue>,
    /// Request timeout.
    timeout: Duration,
}

impl fmt::Debug for ChatwootClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatwootClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("account_id", &self.inner.account_id)
            .field("has_agent_token", &self.inner.agent_token.is_some())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl ChatwootClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client that only has an agent bot token.
    ///
    /// Operations that need an agent token will fail with
    /// [`Error::MissingAgentToken`].
    pub fn new(
        base_url: impl Into<String>,
        account_id: u64,
        bot_token: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .account_id(account_id)
            .bot_token(bot_token)
            .build()
    }

    /// Create a client with both an agent bot token and an agent token.
    pub fn with_agent_token(
        base_url: impl Into<String>,
        account_id: u64,
        bot_token: impl Into<String>,
        agent_token: impl Into<String>,
    ) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .account_id(account_id)
            .bot_token(bot_token)
            .agent_token(agent_token)
            .build()
    }

    /// Create a client from deserialized settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        ClientBuilder::from(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the account ID.
    pub fn account_id(&self) -> u64 {
        self.inner.account_id
    }

    /// Whether an agent token is configured.
    pub fn has_agent_token(&self) -> bool {
        self.inner.agent_token.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the contacts API.
    pub fn contacts(&self) -> ContactsApi {
        ContactsApi::new(self.clone())
    }

    /// Access the conversations API.
    pub fn conversations(&self) -> ConversationsApi {
        ConversationsApi::new(self.clone())
    }

    /// Access the messages API.
    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.clone())
    }

    /// Access the labels API.
    pub fn labels(&self) -> LabelsApi {
        LabelsApi::new(self.clone())
    }

    /// Access the assignments API.
    pub fn assignments(&self) -> AssignmentsApi {
        AssignmentsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for a path below the account.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let account = self.inner.account_id;
        let path = path.trim_start_matches('/');
        self.inner
            .base_url
            .join(&format!("api/v1/accounts/{account}/{path}"))
            .map_err(Error::from)
    }

    /// Pick the token for a request, refusing agent-only calls without one.
    fn token(&self, credential: Credential, operation: &'static str) -> Result<&HeaderValue> {
        match credential {
            Credential::Bot => Ok(&self.inner.bot_token),
            Credential::Agent => self
                .inner
                .agent_token
                .as_ref()
                .ok_or(Error::MissingAgentToken { operation }),
        }
    }

    /// Make a GET request and decode the response.
    pub(crate) async fn get<T>(
        &self,
        operation: &'static str,
        credential: Credential,
        path: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self
            .execute::<()>(operation, credential, Method::GET, path, None)
            .await?;
        decode(&body)
    }

    /// Make a POST request and decode the response.
    pub(crate) async fn post<T, B>(
        &self,
        operation: &'static str,
        credential: Credential,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self
            .execute(operation, credential, Method::POST, path, Some(body))
            .await?;
        decode(&body)
    }

    /// Make a POST request and ignore the response body.
    pub(crate) async fn post_no_content<B>(
        &self,
        operation: &'static str,
        credential: Credential,
        path: &str,
        body: &B,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(operation, credential, Method::POST, path, Some(body))
            .await
            .map(|_| ())
    }

    /// Send one request and return the body of a 2xx response.
    async fn execute<B>(
        &self,
        operation: &'static str,
        credential: Credential,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let token = self.token(credential, operation)?.clone();
        let url = self.url(path)?;

        let mut request = self
            .inner
            .http
            .request(method.clone(), url)
            .header(ACCESS_TOKEN_HEADER, token)
            .timeout(self.inner.timeout);

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(encoded);
        }

        tracing::debug!(
            operation,
            method = %method,
            path,
            credential = ?credential,
            "Sending Chatwoot request"
        );

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            operation,
            status = status.as_u16(),
            "Chatwoot response received"
        );

        if !status.is_success() {
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}

/// Decode a successful response body.
fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Connection settings in a form that can live in an application's config file.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Chatwoot installation.
    pub base_url: String,
    /// Account ID.
    pub account_id: u64,
    /// Agent bot token.
    pub bot_token: String,
    /// Agent token for label, assignment, contact and listing calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_token: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("bot_token", &"[REDACTED]")
            .field(
                "agent_token",
                &self.agent_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Builder for creating a ChatwootClient.
pub struct ClientBuilder {
    base_url: Option<String>,
    account_id: u64,
    bot_token: String,
    agent_token: String,
    timeout: Duration,
    user_agent: Option<String>,
    http: Option<reqwest::Client>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("account_id", &self.account_id)
            .field("has_agent_token", &!self.agent_token.is_empty())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_http_client", &self.http.is_some())
            .finish()
    }
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            account_id: 0,
            bot_token: String::new(),
            agent_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            http: None,
        }
    }

    /// Set the base URL of the Chatwoot installation.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the account ID.
    pub fn account_id(mut self, account_id: u64) -> Self {
        self.account_id = account_id;
        self
    }

    /// Set the agent bot token.
    pub fn bot_token(mut self, token: impl Into<String>) -> Self {
        self.bot_token = token.into();
        self
    }

    /// Set the agent token. An empty string means "no agent token".
    pub fn agent_token(mut self, token: impl Into<String>) -> Self {
        self.agent_token = token.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent. Ignored when an HTTP client is supplied.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use an existing HTTP client instead of building one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ChatwootClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let bot_token = token_header(&self.bot_token, "bot token")?;
        let agent_token = if self.agent_token.is_empty() {
            None
        } else {
            Some(token_header(&self.agent_token, "agent token")?)
        };

        let http = match self.http {
            Some(http) => http,
            None => {
                let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
                reqwest::Client::builder().user_agent(user_agent).build()?
            }
        };

        Ok(ChatwootClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                account_id: self.account_id,
                bot_token,
                agent_token,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ClientConfig> for ClientBuilder {
    fn from(config: &ClientConfig) -> Self {
        let mut builder = ClientBuilder::new()
            .base_url(config.base_url.clone())
            .account_id(config.account_id)
            .bot_token(config.bot_token.clone());
        if let Some(token) = &config.agent_token {
            builder = builder.agent_token(token.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder
    }
}

fn default_user_agent() -> String {
    format!("chatwoot-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Convert a token into a sensitive header value.
fn token_header(token: &str, what: &str) -> Result<HeaderValue> {
    let Ok(mut value) = HeaderValue::from_str(token) else {
        return Err(Error::Config(format!("Invalid {what}")));
    };
    value.set_sensitive(true);
    Ok(value)
}

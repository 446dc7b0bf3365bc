/*
[INPUT]:  Credentials, HTTP configuration and an optional custom transport
[OUTPUT]: Configured client holding credential state and signer
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::auth::{Credentials, RequestSigner};
use crate::types::Params;

use super::error::Result;
use super::transport::{ReqwestTransport, Transport};

/// Base URL for the MindMeister API
pub const DEFAULT_BASE_URL: &str = "https://www.mindmeister.com";

/// REST endpoint, relative to the base URL
pub const REST_PATH: &str = "/services/rest";

/// Browser authentication endpoint, relative to the base URL
pub const AUTH_PATH: &str = "/services/auth/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main client for the MindMeister API
///
/// Unauthenticated until an auth token is supplied or obtained through
/// [`MindMeisterClient::callback`]. Only `auth` methods may be dispatched
/// before that.
#[derive(Debug, Clone)]
pub struct MindMeisterClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl MindMeisterClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, &config.base_url, Arc::new(transport))
    }

    /// Create a client on top of an arbitrary transport
    pub fn with_transport(
        credentials: Credentials,
        base_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let signer = RequestSigner::new(credentials.secret_key());
        Ok(Self {
            transport,
            base_url: Url::parse(base_url)?,
            credentials,
            signer,
        })
    }

    /// Consume the client and return it authenticated with `auth_token`
    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.set_auth_token(auth_token);
        self
    }

    /// Store the auth token used by every following call
    pub fn set_auth_token(&mut self, auth_token: impl Into<String>) {
        self.credentials.set_auth_token(auth_token);
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.credentials.auth_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.has_auth_token()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Signed URL for `path` carrying `params`
    pub(crate) fn signed_url(&self, path: &str, params: &Params) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.set_query(Some(&self.signer.signed_query_string(params)));
        Ok(url)
    }
}

/*
[INPUT]:  Client credentials and a frob obtained in the browser
[OUTPUT]: Authentication URL and stored auth token
[POS]:    Auth layer - out-of-band authentication bootstrap
[UPDATE]: When auth endpoints or flow steps change
*/

use std::fmt;

use tracing::info;

use crate::http::{MindMeisterClient, MindMeisterError, Result, client::AUTH_PATH};
use crate::types::{AUTH_GET_TOKEN, AuthToken, Params};

const AUTH_REQUIRED_MESSAGE: &str = "Authentication token missing";

/// Permission level requested from the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPerms {
    #[default]
    Read,
    Write,
    Delete,
}

impl AuthPerms {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthPerms::Read => "read",
            AuthPerms::Write => "write",
            AuthPerms::Delete => "delete",
        }
    }
}

impl fmt::Display for AuthPerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MindMeisterClient {
    /// URL the user has to open to grant access (read permission).
    ///
    /// GET /services/auth/?api_key=..&method=mm.auth.getToken&perms=read&api_sig=..
    pub fn auth_url(&self) -> Result<String> {
        self.auth_url_with_perms(AuthPerms::Read)
    }

    pub fn auth_url_with_perms(&self, perms: AuthPerms) -> Result<String> {
        let params = Params::new()
            .with("api_key", self.credentials().api_key.as_str())
            .with("method", AUTH_GET_TOKEN)
            .with("perms", perms.as_str());
        Ok(self.signed_url(AUTH_PATH, &params)?.to_string())
    }

    /// Error returned for non-auth calls made before authentication.
    pub(crate) fn authentication_required(&self) -> MindMeisterError {
        match self.auth_url() {
            Ok(auth_url) => MindMeisterError::AuthenticationRequired {
                message: AUTH_REQUIRED_MESSAGE.to_string(),
                auth_url,
            },
            Err(err) => err,
        }
    }

    /// Complete authentication with the frob handed out by the browser flow.
    ///
    /// Exchanges the frob through mm.auth.getToken and keeps the returned
    /// token for all following calls.
    pub async fn callback(&mut self, frob: &str) -> Result<AuthToken> {
        let auth = self.auth_get_token(frob).await?;
        self.set_auth_token(auth.token.as_str());
        info!(
            perms = auth.perms.as_deref().unwrap_or("unknown"),
            "authentication completed"
        );
        Ok(auth)
    }
}

/*
[INPUT]:  API key, shared secret and optional auth token
[OUTPUT]: Credential state for parameter assembly and signing
[POS]:    Auth layer - credential holder
[UPDATE]: When credential fields change
*/

use std::fmt;

/// Application credentials plus the user auth token.
///
/// `secret_key` is only ever used as signing material; it is never sent
/// and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    secret_key: String,
    pub auth_token: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.set_auth_token(auth_token);
        self
    }

    /// Store the token; an empty token leaves the credentials unauthenticated.
    pub fn set_auth_token(&mut self, auth_token: impl Into<String>) {
        let auth_token = auth_token.into();
        self.auth_token = (!auth_token.is_empty()).then_some(auth_token);
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn has_auth_token(&self) -> bool {
        self.auth_token.is_some()
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<set>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_credentials_have_no_token() {
        let credentials = Credentials::new("key", "secret");
        assert!(!credentials.has_auth_token());
        assert_eq!(credentials.secret_key(), "secret");
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let credentials = Credentials::new("key", "secret").with_auth_token("");
        assert!(credentials.auth_token().is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials = Credentials::new("key", "top-secret").with_auth_token("tok123");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("tok123"));
        assert!(debug.contains("key"));
    }
}

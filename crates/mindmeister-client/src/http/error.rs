/*
[INPUT]:  Error sources (transport, envelope, auth gate, name translation)
[OUTPUT]: Structured error types with context for diagnostics
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or remote error codes
*/

use thiserror::Error;

use crate::types::Params;

/// Error codes reported by the MindMeister API in `rsp.err.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    ObjectNotFound,
    RequiredParameterMissing,
    InvalidSignature,
    MissingSignature,
    LoginFailed,
    InvalidApiKey,
    InvalidFrob,
    MethodNotFound,
    Other(i64),
}

impl ApiErrorCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            20 => ApiErrorCode::ObjectNotFound,
            23 => ApiErrorCode::RequiredParameterMissing,
            96 => ApiErrorCode::InvalidSignature,
            97 => ApiErrorCode::MissingSignature,
            98 => ApiErrorCode::LoginFailed,
            100 => ApiErrorCode::InvalidApiKey,
            108 => ApiErrorCode::InvalidFrob,
            112 => ApiErrorCode::MethodNotFound,
            other => ApiErrorCode::Other(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ApiErrorCode::ObjectNotFound => 20,
            ApiErrorCode::RequiredParameterMissing => 23,
            ApiErrorCode::InvalidSignature => 96,
            ApiErrorCode::MissingSignature => 97,
            ApiErrorCode::LoginFailed => 98,
            ApiErrorCode::InvalidApiKey => 100,
            ApiErrorCode::InvalidFrob => 108,
            ApiErrorCode::MethodNotFound => 112,
            ApiErrorCode::Other(code) => *code,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorCode::ObjectNotFound => "object not found",
            ApiErrorCode::RequiredParameterMissing => "required parameter missing",
            ApiErrorCode::InvalidSignature => "the passed signature was invalid",
            ApiErrorCode::MissingSignature => "the call required signing but no signature was sent",
            ApiErrorCode::LoginFailed => "the login details or auth token passed were invalid",
            ApiErrorCode::InvalidApiKey => "the API key passed was not valid or has expired",
            ApiErrorCode::InvalidFrob => "the specified frob does not exist or has already been used",
            ApiErrorCode::MethodNotFound => "the requested method was not found",
            ApiErrorCode::Other(_) => "unclassified API error",
        }
    }

    /// Codes that mean the credentials or the auth exchange are at fault.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiErrorCode::InvalidSignature
                | ApiErrorCode::MissingSignature
                | ApiErrorCode::LoginFailed
                | ApiErrorCode::InvalidApiKey
                | ApiErrorCode::InvalidFrob
        )
    }
}

/// Failure reported by the service after a complete round trip.
///
/// Keeps the full outbound parameter set so the failing call can be
/// reconstructed from the error alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct RemoteApiError {
    pub code: i64,
    pub message: String,
    pub request_params: Params,
}

impl RemoteApiError {
    pub fn new(code: i64, message: impl Into<String>, request_params: Params) -> Self {
        Self {
            code,
            message: message.into(),
            request_params,
        }
    }

    pub fn kind(&self) -> ApiErrorCode {
        ApiErrorCode::from_code(self.code)
    }

    /// Remote method name of the failing call, empty when unknown.
    pub fn method(&self) -> String {
        self.param("method")
    }

    fn param(&self, key: &str) -> String {
        self.request_params
            .get(key)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// `code: method -- message`, plus a hint for codes 112, 23 and 108.
    pub fn render(&self) -> String {
        let method = self.method();
        let base = format!("{}: {} -- {}", self.code, method, self.message);
        match self.kind() {
            ApiErrorCode::MethodNotFound => format!("{base} (method name between >s: >{method}<)"),
            ApiErrorCode::RequiredParameterMissing => format!("{base} {}", self.request_params),
            ApiErrorCode::InvalidFrob => {
                format!("{base} (provided frob between >s: >{}<)", self.param("frob"))
            }
            _ => base,
        }
    }
}

/// Main error type for the MindMeister client
#[derive(Error, Debug)]
pub enum MindMeisterError {
    /// A non-auth call was attempted without an auth token
    #[error("{message}: {auth_url}")]
    AuthenticationRequired { message: String, auth_url: String },

    /// API returned `stat: fail`
    #[error(transparent)]
    Api(#[from] RemoteApiError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Identifier does not start with a known API scope
    #[error("Not a MindMeister API method: {0}")]
    UnknownScope(String),

    /// Identifier has a known scope but no method segment
    #[error("Malformed API method name: {0}")]
    InvalidMethodName(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl MindMeisterError {
    /// Check if the error asks the caller to (re-)authenticate
    pub fn is_auth_error(&self) -> bool {
        match self {
            MindMeisterError::AuthenticationRequired { .. } => true,
            MindMeisterError::Api(err) => err.kind().is_auth_failure(),
            _ => false,
        }
    }

    /// Authentication URL to visit, if the error carries one
    pub fn auth_url(&self) -> Option<&str> {
        match self {
            MindMeisterError::AuthenticationRequired { auth_url, .. } => Some(auth_url.as_str()),
            _ => None,
        }
    }

    /// Numeric code of a remote failure
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            MindMeisterError::Api(err) => Some(err.code),
            _ => None,
        }
    }
}

/// Result type alias for MindMeister operations
pub type Result<T> = std::result::Result<T, MindMeisterError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(method: &str) -> Params {
        Params::new()
            .with("api_key", "key")
            .with("method", method)
    }

    #[test]
    fn test_code_roundtrip() {
        for code in [20, 23, 96, 97, 98, 100, 108, 112, 7] {
            assert_eq!(ApiErrorCode::from_code(code).code(), code);
        }
        assert_eq!(ApiErrorCode::from_code(7), ApiErrorCode::Other(7));
    }

    #[test]
    fn test_method_not_found_message() {
        let err = RemoteApiError::new(112, "Method not found", params("mm.maps.nope"));
        assert_eq!(
            err.to_string(),
            "112: mm.maps.nope -- Method not found (method name between >s: >mm.maps.nope<)"
        );
    }

    #[test]
    fn test_required_parameter_message_includes_params() {
        let err = RemoteApiError::new(23, "Required parameter missing", params("mm.maps.add"));
        assert_eq!(
            err.to_string(),
            r#"23: mm.maps.add -- Required parameter missing {api_key: "key", method: "mm.maps.add"}"#
        );
    }

    #[test]
    fn test_invalid_frob_message() {
        let err = RemoteApiError::new(
            108,
            "Invalid frob",
            params("mm.auth.getToken").with("frob", "f00"),
        );
        assert!(err.to_string().ends_with("(provided frob between >s: >f00<)"));
    }

    #[test]
    fn test_generic_message() {
        let err = RemoteApiError::new(20, "Object not found", params("mm.maps.getMap"));
        assert_eq!(err.to_string(), "20: mm.maps.getMap -- Object not found");
    }

    #[test]
    fn test_display_matches_render() {
        let err = RemoteApiError::new(112, "Method not found", params("mm.x.y"));
        assert_eq!(err.to_string(), err.render());

        let boxed: Box<dyn std::error::Error> = Box::new(err.clone());
        assert!(boxed.source().is_none());
        assert_eq!(boxed.to_string(), err.render());
    }

    #[test]
    fn test_error_is_auth_error() {
        let required = MindMeisterError::AuthenticationRequired {
            message: "Authentication token missing".into(),
            auth_url: "https://example.test/services/auth/?a=b".into(),
        };
        assert!(required.is_auth_error());
        assert_eq!(required.auth_url(), Some("https://example.test/services/auth/?a=b"));

        let login = MindMeisterError::from(RemoteApiError::new(98, "Login failed", Params::new()));
        assert!(login.is_auth_error());
        assert_eq!(login.remote_code(), Some(98));

        let missing = MindMeisterError::from(RemoteApiError::new(20, "Not found", Params::new()));
        assert!(!missing.is_auth_error());
    }
}

/*
[INPUT]:  Conventional or remote method names plus caller params
[OUTPUT]: Decoded response payloads or typed errors
[POS]:    HTTP layer - auth gate, parameter assembly and round trip
[UPDATE]: When default parameters or the dispatch flow change
*/

use tracing::{debug, trace, warn};

use crate::types::{ApiEnvelope, MethodName, Params, Payload, is_auth_method};

use super::client::{MindMeisterClient, REST_PATH};
use super::error::{MindMeisterError, RemoteApiError, Result};

pub const RESPONSE_FORMAT: &str = "json";

impl MindMeisterClient {
    /// Call an API method by its conventional name, e.g. `maps_get_list`.
    pub async fn call(&self, name: &str, params: Params) -> Result<Payload> {
        let method = MethodName::from_conventional(name)?;
        self.request(method.as_str(), params).await
    }

    /// Call an API method by its remote name, e.g. `mm.maps.getList`.
    ///
    /// Without an auth token only `auth` methods are dispatched; anything
    /// else fails with [`MindMeisterError::AuthenticationRequired`] before
    /// touching the network.
    pub async fn request(&self, remote_name: &str, params: Params) -> Result<Payload> {
        if !self.is_authenticated() && !is_auth_method(remote_name) {
            debug!(method = remote_name, "auth token missing, refusing call");
            return Err(self.authentication_required());
        }

        let params = self.assemble_params(remote_name, params);
        let url = self.signed_url(REST_PATH, &params)?;
        trace!(method = remote_name, path = url.path(), "dispatching API call");

        let body = self.transport().get(url).await?;
        decode_response(&body, params)
    }

    /// Defaults, then caller params, then the method name.
    ///
    /// Caller values replace defaults on colliding keys, except that an
    /// empty caller `auth_token` never blanks a stored token. `method` is
    /// always the derived remote name.
    pub fn assemble_params(&self, remote_name: &str, params: Params) -> Params {
        let credentials = self.credentials();
        let mut assembled = Params::new()
            .with("api_key", credentials.api_key.as_str())
            .with("auth_token", credentials.auth_token().unwrap_or_default())
            .with("response_format", RESPONSE_FORMAT);
        assembled.merge(params);
        let blank_token = assembled
            .get("auth_token")
            .is_some_and(|value| value.to_string().is_empty());
        if let (true, Some(token)) = (blank_token, credentials.auth_token()) {
            assembled.insert("auth_token", token);
        }
        assembled.insert("method", remote_name);
        assembled
    }
}

/// Decode a response body, turning `stat: fail` into [`RemoteApiError`].
pub fn decode_response(body: &str, request_params: Params) -> Result<Payload> {
    match ApiEnvelope::parse(body)?.into_result() {
        Ok(payload) => Ok(payload),
        Err(err) => {
            let error = RemoteApiError::new(err.code, err.msg, request_params);
            warn!(code = error.code, method = %error.method(), "API call failed");
            Err(MindMeisterError::Api(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use reqwest::Url;

    use super::*;
    use crate::auth::Credentials;
    use crate::http::Transport;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        body: String,
        requests: Mutex<Vec<Url>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: Url) -> Result<String> {
            self.requests.lock().unwrap().push(url);
            Ok(self.body.clone())
        }
    }

    fn client(body: &str) -> (MindMeisterClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport {
            body: body.to_string(),
            ..Default::default()
        });
        let client = MindMeisterClient::with_transport(
            Credentials::new("key", "secret"),
            "https://www.mindmeister.com",
            transport.clone(),
        )
        .expect("client init");
        (client, transport)
    }

    #[test]
    fn test_assemble_params_order_and_defaults() {
        let (client, _) = client("");
        let params = client.assemble_params("mm.maps.getList", Params::new().with("page", 2));

        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["api_key", "auth_token", "response_format", "page", "method"]
        );
        assert_eq!(params.get("auth_token").map(ToString::to_string), Some(String::new()));
    }

    #[test]
    fn test_assemble_params_method_always_wins() {
        let (client, _) = client("");
        let caller = Params::new()
            .with("method", "mm.evil.call")
            .with("response_format", "xml");
        let params = client.assemble_params("mm.maps.getList", caller);

        assert_eq!(
            params.get("method").map(ToString::to_string).as_deref(),
            Some("mm.maps.getList")
        );
        assert_eq!(
            params.get("response_format").map(ToString::to_string).as_deref(),
            Some("xml")
        );
    }

    #[test]
    fn test_empty_caller_token_keeps_stored_token() {
        let (client, _) = client("");
        let client = client.with_auth_token("stored");

        let params =
            client.assemble_params("mm.maps.getList", Params::new().with("auth_token", ""));
        assert_eq!(
            params.get("auth_token").map(ToString::to_string).as_deref(),
            Some("stored")
        );

        let params =
            client.assemble_params("mm.maps.getList", Params::new().with("auth_token", "other"));
        assert_eq!(
            params.get("auth_token").map(ToString::to_string).as_deref(),
            Some("other")
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_call_makes_no_request() {
        let (client, transport) = client(r#"{"rsp":{"stat":"ok"}}"#);
        let err = client.call("maps_get_list", Params::new()).await.unwrap_err();

        assert!(matches!(err, MindMeisterError::AuthenticationRequired { .. }));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_auth_call_allowed_without_token() {
        let (client, transport) = client(r#"{"rsp":{"stat":"ok","frob":"abc"}}"#);
        let payload = client.call("auth_get_frob", Params::new()).await.unwrap();

        assert_eq!(payload.get("frob").and_then(|v| v.as_str()), Some("abc"));
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "/services/rest");
        assert!(requests[0].query().unwrap_or_default().contains("method=mm.auth.getFrob"));
    }

    #[tokio::test]
    async fn test_unknown_name_rejected_before_gate() {
        let (client, transport) = client("");
        let err = client.call("each_index", Params::new()).await.unwrap_err();

        assert!(matches!(err, MindMeisterError::UnknownScope(_)));
        assert!(transport.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_decode_fail_carries_params() {
        let params = Params::new().with("method", "mm.maps.nothing");
        let err = decode_response(
            r#"{"rsp":{"stat":"fail","err":{"code":"112","msg":"Method not found"}}}"#,
            params.clone(),
        )
        .unwrap_err();

        match err {
            MindMeisterError::Api(err) => {
                assert_eq!(err.code, 112);
                assert_eq!(err.request_params, params);
                assert!(err.to_string().contains("mm.maps.nothing"));
            }
            other => panic!("Expected Api error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_fail_without_code_is_api_error() {
        let params = Params::new().with("method", "mm.auth.checkToken");
        for body in [
            r#"{"rsp":{"stat":"fail","err":{"msg":"Login failed"}}}"#,
            r#"{"rsp":{"stat":"fail","err":{"code":null,"msg":null}}}"#,
            r#"{"rsp":{"stat":"fail"}}"#,
        ] {
            match decode_response(body, params.clone()).unwrap_err() {
                MindMeisterError::Api(err) => {
                    assert_eq!(err.code, 0, "{body}");
                    assert_eq!(err.request_params, params);
                }
                other => panic!("Expected Api error variant for {body}, got {other:?}"),
            }
        }
    }
}

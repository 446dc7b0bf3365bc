/*
[INPUT]:  Request parameters and the application secret key
[OUTPUT]: MD5 request signature and signed query strings
[POS]:    Auth layer - request signing for every API call
[UPDATE]: When changing signing algorithm or query encoding
*/

use std::fmt;

use md5::{Digest, Md5};
use url::form_urlencoded;

use crate::types::Params;

/// Query parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "api_sig";

/// Signs MindMeister API calls with the application secret
#[derive(Clone)]
pub struct RequestSigner {
    secret_key: String,
}

impl RequestSigner {
    /// Create a new request signer with the given secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Signature base string: secret followed by `key value` pairs sorted by key.
    ///
    /// Values are taken raw, before any URL encoding.
    fn signature_base(&self, params: &Params) -> String {
        let mut base = self.secret_key.clone();
        for (key, value) in params.sorted() {
            base.push_str(key);
            base.push_str(&value.to_string());
        }
        base
    }

    /// Lowercase hex MD5 of the signature base string
    pub fn sign(&self, params: &Params) -> String {
        let digest = Md5::digest(self.signature_base(params).as_bytes());
        hex::encode(digest)
    }

    /// Build a signed query string from parameters.
    ///
    /// Parameters are form encoded in insertion order and the signature is
    /// appended as `api_sig`.
    pub fn signed_query_string(&self, params: &Params) -> String {
        let mut query = encode_query(params);
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(SIGNATURE_PARAM);
        query.push('=');
        query.push_str(&self.sign(params));
        query
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// `application/x-www-form-urlencoded` serialization keeping parameter order.
pub fn encode_query(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}

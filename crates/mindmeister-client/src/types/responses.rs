/*
[INPUT]:  Successful response payloads
[OUTPUT]: Typed payloads for the authentication calls
[POS]:    Data layer - typed responses
[UPDATE]: When typed wrappers are added for more payloads
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `rsp.auth` returned by mm.auth.getToken and mm.auth.checkToken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    #[serde(default)]
    pub perms: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct AuthPayload {
    pub auth: AuthToken,
}

/// `rsp.frob` returned by mm.auth.getFrob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frob {
    pub frob: String,
}

/*
[INPUT]:  Frob values and the current auth token
[OUTPUT]: Auth tokens and frobs
[POS]:    API layer - auth scope (callable without token)
[UPDATE]: When auth endpoints change
*/

use crate::http::{MindMeisterClient, MindMeisterError, Result};
use crate::types::{AuthToken, Frob, Params, Payload, responses::AuthPayload};

impl MindMeisterClient {
    /// Exchange a frob for an auth token
    ///
    /// mm.auth.getToken
    pub async fn auth_get_token(&self, frob: &str) -> Result<AuthToken> {
        let payload = self
            .call("auth_get_token", Params::new().with("frob", frob))
            .await?;
        auth_from_payload(payload)
    }

    /// Verify the stored auth token
    ///
    /// mm.auth.checkToken
    pub async fn auth_check_token(&self) -> Result<AuthToken> {
        let payload = self.call("auth_check_token", Params::new()).await?;
        auth_from_payload(payload)
    }

    /// Request a frob for the desktop authentication flow
    ///
    /// mm.auth.getFrob
    pub async fn auth_get_frob(&self) -> Result<Frob> {
        let payload = self.call("auth_get_frob", Params::new()).await?;
        Ok(serde_json::from_value(payload.into())?)
    }
}

fn auth_from_payload(payload: Payload) -> Result<AuthToken> {
    if !payload.contains_key("auth") {
        return Err(MindMeisterError::InvalidResponse(
            "auth payload missing".to_string(),
        ));
    }
    let parsed: AuthPayload = serde_json::from_value(payload.into())?;
    Ok(parsed.auth)
}

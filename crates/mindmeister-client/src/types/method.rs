/*
[INPUT]:  Conventional identifiers such as `maps_new_from_template`
[OUTPUT]: Remote method names such as `mm.maps.newFromTemplate`
[POS]:    Data layer - name translation for method dispatch
[UPDATE]: When the remote naming convention changes
*/

use std::fmt;

use crate::http::{MindMeisterError, Result};

use super::scope::ApiScope;

/// Prefix shared by every remote method name.
pub const REMOTE_PREFIX: &str = "mm";

/// Remote method used for the frob to token exchange.
pub const AUTH_GET_TOKEN: &str = "mm.auth.getToken";

/// Detects whether an identifier addresses the MindMeister API.
///
/// Only the first underscore separated token is inspected, so `each_index`
/// or `to_i` are rejected while `maps_whatever` is accepted.
pub fn is_recognized_scope(identifier: &str) -> bool {
    identifier
        .split('_')
        .next()
        .is_some_and(|scope| scope.parse::<ApiScope>().is_ok())
}

/// A translated remote method name together with its scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodName {
    scope: ApiScope,
    remote: String,
}

impl MethodName {
    /// Translate `scope_segment_segment...` into `mm.<scope>.<camelCaseRest>`.
    ///
    /// The second token is kept verbatim, every following token gets its
    /// first character uppercased and is appended without separator.
    pub fn from_conventional(identifier: &str) -> Result<Self> {
        let mut tokens = identifier.split('_');

        let scope = tokens
            .next()
            .and_then(|scope| scope.parse::<ApiScope>().ok())
            .ok_or_else(|| MindMeisterError::UnknownScope(identifier.to_string()))?;

        let head = match tokens.next() {
            Some(head) if !head.is_empty() => head,
            _ => return Err(MindMeisterError::InvalidMethodName(identifier.to_string())),
        };

        let mut tail = String::from(head);
        for token in tokens {
            if token.is_empty() {
                return Err(MindMeisterError::InvalidMethodName(identifier.to_string()));
            }
            tail.push_str(&capitalize(token));
        }

        Ok(Self {
            scope,
            remote: format!("{REMOTE_PREFIX}.{}.{tail}", scope.as_str()),
        })
    }

    pub fn scope(&self) -> ApiScope {
        self.scope
    }

    pub fn as_str(&self) -> &str {
        &self.remote
    }

    /// Authentication bootstrap calls may run without an auth token.
    pub fn is_auth_bootstrap(&self) -> bool {
        is_auth_method(&self.remote)
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.remote)
    }
}

/// Any remote name mentioning `auth` belongs to the bootstrap path.
pub fn is_auth_method(remote_name: &str) -> bool {
    remote_name.contains("auth")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/*
[INPUT]:  First token of a conventional method identifier
[OUTPUT]: Recognized MindMeister API scope
[POS]:    Data layer - scope allow-list for method dispatch
[UPDATE]: When MindMeister publishes a new API scope
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiScope {
    Auth,
    Boundaries,
    Connections,
    Files,
    Folders,
    Ideas,
    Images,
    Maps,
    People,
    Realtime,
    Reflection,
    Tasks,
    Test,
    Themes,
    User,
}

impl ApiScope {
    pub const ALL: [ApiScope; 15] = [
        ApiScope::Auth,
        ApiScope::Boundaries,
        ApiScope::Connections,
        ApiScope::Files,
        ApiScope::Folders,
        ApiScope::Ideas,
        ApiScope::Images,
        ApiScope::Maps,
        ApiScope::People,
        ApiScope::Realtime,
        ApiScope::Reflection,
        ApiScope::Tasks,
        ApiScope::Test,
        ApiScope::Themes,
        ApiScope::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiScope::Auth => "auth",
            ApiScope::Boundaries => "boundaries",
            ApiScope::Connections => "connections",
            ApiScope::Files => "files",
            ApiScope::Folders => "folders",
            ApiScope::Ideas => "ideas",
            ApiScope::Images => "images",
            ApiScope::Maps => "maps",
            ApiScope::People => "people",
            ApiScope::Realtime => "realtime",
            ApiScope::Reflection => "reflection",
            ApiScope::Tasks => "tasks",
            ApiScope::Test => "test",
            ApiScope::Themes => "themes",
            ApiScope::User => "user",
        }
    }
}

impl fmt::Display for ApiScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not one of the MindMeister scopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown API scope: {0}")]
pub struct UnknownScope(pub String);

impl FromStr for ApiScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiScope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| UnknownScope(s.to_string()))
    }
}

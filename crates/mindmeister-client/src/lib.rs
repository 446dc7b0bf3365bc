/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public MindMeister client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AuthPerms, Credentials, RequestSigner};

// Re-export commonly used types from http
pub use http::{
    ApiErrorCode,
    ClientConfig,
    MindMeisterClient,
    MindMeisterError,
    RemoteApiError,
    ReqwestTransport,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;

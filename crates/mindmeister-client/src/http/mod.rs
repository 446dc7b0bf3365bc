/*
[INPUT]:  HTTP client configuration and API method calls
[OUTPUT]: Decoded payloads and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new transports or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod transport;

pub use error::{ApiErrorCode, MindMeisterError, RemoteApiError, Result};
pub use transport::{ReqwestTransport, Transport};

pub use client::{ClientConfig, DEFAULT_BASE_URL, MindMeisterClient};
pub use dispatch::decode_response;

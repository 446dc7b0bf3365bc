/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums for method names, params and envelopes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod envelope;
pub mod method;
pub mod params;
pub mod responses;
pub mod scope;

pub use envelope::{ApiEnvelope, ErrorBody, Payload};
pub use method::{AUTH_GET_TOKEN, MethodName, is_auth_method, is_recognized_scope};
pub use params::{ParamValue, Params};
pub use responses::{AuthToken, AuthUser, Frob};
pub use scope::{ApiScope, UnknownScope};

/*
[INPUT]:  Authentication configuration and credentials
[OUTPUT]: Request signatures, auth URLs and stored auth tokens
[POS]:    Auth layer - handles MindMeister API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod flow;
pub mod signer;

pub use credentials::Credentials;
pub use flow::AuthPerms;
pub use signer::{RequestSigner, SIGNATURE_PARAM, encode_query};

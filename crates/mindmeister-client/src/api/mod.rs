/*
[INPUT]:  Typed arguments for known remote operations
[OUTPUT]: Payloads from the generic dispatch path
[POS]:    API layer - declared methods per MindMeister scope
[UPDATE]: When wrapping additional remote methods
*/

pub mod auth;
pub mod folders;
pub mod ideas;
pub mod maps;

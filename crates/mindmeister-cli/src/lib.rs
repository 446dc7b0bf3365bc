/*
[INPUT]:  Public API exports for mindmeister-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod token_store;

// Re-export main types for convenience
pub use config::CliConfig;
pub use token_store::{StoredToken, TokenStore};

/*
[INPUT]:  Parsed CLI subcommands
[OUTPUT]: Command implementations for the binary
[POS]:    CLI layer - module wiring
[UPDATE]: When adding subcommands
*/

pub mod commands;
pub mod init;

/*
[INPUT]:  Console module tree
[OUTPUT]: Public crate surface for the binary and integration tests
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod controller;
pub mod tui;

pub use config::ConsoleConfig;
pub use controller::{Destination, TaskSession};

/*
[INPUT]:  Client core and endpoint submodules
[OUTPUT]: HTTP module surface
[POS]:    HTTP layer - module root
[UPDATE]: When adding endpoint groups
*/

pub mod client;
pub mod error;
pub mod tasks;
pub mod typeahead;

pub use client::{ClientConfig, WorkflowClient, DEFAULT_BASE_URL};
pub use error::{Result, WorkflowError};

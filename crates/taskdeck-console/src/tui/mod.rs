/*
[INPUT]:  Workflow client, configuration, and terminal events
[OUTPUT]: Ratatui console for the open-task screens
[POS]:    TUI module of the taskdeck binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod editor;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run};

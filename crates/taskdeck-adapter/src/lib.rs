/*
[INPUT]:  Workflow backend REST API
[OUTPUT]: Typed async client for tasks, submissions and typeahead search
[POS]:    Adapter crate root - consumed by the console frontend
[UPDATE]: When the public API surface changes
*/

pub mod http;
pub mod types;

pub use http::{ClientConfig, Result, WorkflowClient, WorkflowError, DEFAULT_BASE_URL};
pub use types::{
    calendar_date, FieldSchema, JsonObject, MinimumDate, ObjectSchema, Pagination, SchemaNode,
    SignalButton, SubmitReceipt, Task, TaskKind, TaskListPage, TaskState, TypeaheadItem,
    TypeaheadOptions, UiHints, UI_OPTIONS_KEY, UI_READONLY_KEY, UI_WIDGET_KEY, WIDGET_HIDDEN,
    WIDGET_TEXTAREA, WIDGET_TYPEAHEAD,
};

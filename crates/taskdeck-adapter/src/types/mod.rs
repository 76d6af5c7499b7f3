/*
[INPUT]:  Submodule type definitions
[OUTPUT]: Flat re-export surface for the crate's data models
[POS]:    Data layer - module root
[UPDATE]: When adding new type modules
*/

pub mod responses;
pub mod schema;
pub mod task;

pub use responses::{SubmitReceipt, TypeaheadItem};
pub use schema::{
    calendar_date, FieldSchema, MinimumDate, ObjectSchema, SchemaNode, TypeaheadOptions,
    UiHints, UI_OPTIONS_KEY, UI_READONLY_KEY, UI_WIDGET_KEY, WIDGET_HIDDEN, WIDGET_TEXTAREA,
    WIDGET_TYPEAHEAD,
};
pub use task::{
    JsonObject, Pagination, SignalButton, Task, TaskKind, TaskListPage, TaskState,
};

/*
[INPUT]:  Task payloads from the workflow API
[OUTPUT]: Typed task, state and kind models plus list pagination
[POS]:    Data layer - core task model
[UPDATE]: When the task API schema changes
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::{SchemaNode, UiHints};

/// JSON object keyed by form field name.
pub type JsonObject = Map<String, Value>;

/// Lifecycle state of a task inside its process instance.
///
/// `Ready` is the only state in which the assigned user may change and
/// submit the form; every other state renders read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Ready,
    Started,
    Completed,
    Error,
    Cancelled,
    Future,
    Waiting,
    Likely,
    Maybe,
}

impl TaskState {
    pub fn is_ready(&self) -> bool {
        matches!(self, TaskState::Ready)
    }

    /// The state's wire spelling, used verbatim in headings.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TaskState::Ready => "READY",
            TaskState::Started => "STARTED",
            TaskState::Completed => "COMPLETED",
            TaskState::Error => "ERROR",
            TaskState::Cancelled => "CANCELLED",
            TaskState::Future => "FUTURE",
            TaskState::Waiting => "WAITING",
            TaskState::Likely => "LIKELY",
            TaskState::Maybe => "MAYBE",
        }
    }
}

/// Kind of a task node in the process model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    UserTask,
    ManualTask,
    ScriptTask,
    ServiceTask,
    NoneTask,
    CallActivity,
    SubWorkflowTask,
}

impl TaskKind {
    /// Manual tasks carry no form of their own; the client presents a
    /// synthetic acknowledgement instead.
    pub fn is_manual(&self) -> bool {
        matches!(self, TaskKind::ManualTask)
    }

    /// User tasks get the save-and-close action and signal buttons.
    pub fn is_user(&self) -> bool {
        matches!(self, TaskKind::UserTask)
    }
}

/// One human task addressed by `(process_instance_id, id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub process_instance_id: i64,
    /// Slash-separated process model identifier, e.g. `"misc/orders"`.
    pub process_model_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_model_display_name: Option<String>,
    pub name_for_display: String,
    pub kind: TaskKind,
    pub state: TaskState,
    /// Whether the current user can drive this task to completion right now.
    #[serde(default)]
    pub can_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_schema: Option<SchemaNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_ui_schema: Option<UiHints>,
    /// Saved form data, when the task has been drafted before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
    /// Extra escalation actions the process model exposes for this task.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signal_buttons: Vec<SignalButton>,
}

/// Declarative action button bound to a signal event.
///
/// The `event` descriptor is opaque to the client and posted back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalButton {
    pub label: String,
    pub event: Value,
}

/// One page of the open-task listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListPage {
    pub results: Vec<Task>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub count: u32,
    pub pages: u32,
    pub total: u32,
}

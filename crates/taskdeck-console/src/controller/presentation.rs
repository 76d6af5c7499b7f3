/*
[INPUT]:  A fetched task plus the current in-flight flag
[OUTPUT]: Render-ready form description: schema, hints, heading, actions
[POS]:    Controller layer - form presentation builder
[UPDATE]: When task kinds gain new actions or rendering rules
*/

use indexmap::IndexMap;
use serde_json::Value;
use taskdeck_adapter::{FieldSchema, JsonObject, ObjectSchema, SchemaNode, Task, UiHints};

/// Name of the synthetic acknowledgement field manual tasks submit.
pub const MANUAL_TASK_MARKER: &str = "is_manual_task";

/// What a form action does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    SaveAndClose,
    /// Index into the task's signal buttons.
    Signal(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: String,
    pub action: FormAction,
    pub enabled: bool,
}

/// Everything the form screen needs to draw one task.
///
/// Derived fresh from the task whenever the screen renders, so a state or
/// in-flight change never leaves stale buttons around.
#[derive(Debug, Clone)]
pub struct FormPresentation {
    pub heading: String,
    pub schema: SchemaNode,
    pub ui_hints: UiHints,
    pub actions: Vec<ActionButton>,
    pub read_only: bool,
}

impl FormPresentation {
    pub fn derive(task: &Task, in_flight: bool) -> Self {
        let read_only = !task.state.is_ready();
        let heading = if read_only {
            format!("{} ({})", task.name_for_display, task.state.wire_name())
        } else {
            task.name_for_display.clone()
        };

        let schema = effective_schema(task);
        let mut ui_hints = task.form_ui_schema.clone().unwrap_or_default();
        if task.kind.is_manual() {
            ui_hints.hide_field(MANUAL_TASK_MARKER);
        }
        if read_only {
            ui_hints.mark_read_only();
        }

        let mut actions = Vec::new();
        if !read_only {
            let submit_label = if task.kind.is_manual() {
                "Continue"
            } else {
                "Submit"
            };
            actions.push(ActionButton {
                label: submit_label.to_string(),
                action: FormAction::Submit,
                enabled: !in_flight,
            });
            if task.kind.is_user() {
                actions.push(ActionButton {
                    label: "Save and Close".to_string(),
                    action: FormAction::SaveAndClose,
                    enabled: !in_flight,
                });
                for (index, button) in task.signal_buttons.iter().enumerate() {
                    actions.push(ActionButton {
                        label: button.label.clone(),
                        action: FormAction::Signal(index),
                        enabled: !in_flight,
                    });
                }
            }
        }

        Self {
            heading,
            schema,
            ui_hints,
            actions,
            read_only,
        }
    }
}

/// The schema the form actually renders.
///
/// Manual tasks carry no form of their own; they get a single hidden
/// boolean acknowledgement so submission still sends a payload the engine
/// recognizes. Everything else uses the task's schema, or an empty object
/// when the task has none.
pub fn effective_schema(task: &Task) -> SchemaNode {
    if task.kind.is_manual() {
        let mut properties = IndexMap::new();
        properties.insert(
            MANUAL_TASK_MARKER.to_string(),
            SchemaNode::Field(FieldSchema {
                field_type: Some("boolean".to_string()),
                default: Some(Value::Bool(true)),
                ..FieldSchema::default()
            }),
        );
        return SchemaNode::Object(ObjectSchema {
            schema_type: Some("object".to_string()),
            properties,
            ..ObjectSchema::default()
        });
    }
    task.form_schema
        .clone()
        .unwrap_or_else(SchemaNode::empty_object)
}

/// Copy schema defaults into form data for every field the user has not
/// touched yet. Nested objects are created only when a default below them
/// actually lands.
pub fn seed_defaults(schema: &SchemaNode, data: &mut JsonObject) {
    let Some(object) = schema.as_object() else {
        return;
    };
    for (name, child) in &object.properties {
        match child {
            SchemaNode::Field(field) => {
                if let Some(default) = &field.default {
                    data.entry(name.clone()).or_insert_with(|| default.clone());
                }
            }
            SchemaNode::Object(_) => {
                let created = !data.contains_key(name);
                if let Value::Object(nested) = data
                    .entry(name.clone())
                    .or_insert_with(|| Value::Object(JsonObject::new()))
                {
                    seed_defaults(child, nested);
                }
                let still_empty = data
                    .get(name)
                    .and_then(Value::as_object)
                    .is_some_and(|nested| nested.is_empty());
                if created && still_empty {
                    data.remove(name);
                }
            }
        }
    }
}

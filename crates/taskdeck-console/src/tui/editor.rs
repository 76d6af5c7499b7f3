/*
[INPUT]:  Form presentation, saved form data, and key events
[OUTPUT]: Editable field state, focus handling, and form data sync
[POS]:    TUI form editor backing the task screen
[UPDATE]: When adding widget kinds or editing keys
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use tui_input::{Input, InputRequest};
use tui_textarea::{CursorMove, TextArea};

use taskdeck_adapter::{
    FieldSchema, JsonObject, ObjectSchema, SchemaNode, TypeaheadItem, UiHints, WIDGET_HIDDEN,
    WIDGET_TEXTAREA, WIDGET_TYPEAHEAD,
};

use crate::controller::{FormPresentation, TypeaheadState, ValidationErrors};

/// What a key press did to the editor.
///
/// `Ignored` hands the key back to the screen-level keymap; everything else
/// means the editor consumed it.
#[derive(Debug)]
pub(super) enum EditEffect {
    Ignored,
    Handled,
    /// Form content changed; the screen should sync form data.
    Changed,
    /// A typeahead field wants fresh suggestions for this query.
    SearchRequested {
        field: String,
        category: String,
        query: String,
    },
    /// The focused action button was activated.
    ActionActivated(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FocusTarget {
    Field(usize),
    Action(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ValueType {
    Text,
    Integer,
    Number,
}

pub(super) enum FieldKind {
    Text {
        input: Input,
        value_type: ValueType,
    },
    TextArea {
        area: TextArea<'static>,
    },
    Bool {
        checked: bool,
    },
    Select {
        labels: Vec<String>,
        values: Vec<Value>,
        selected: Option<usize>,
    },
    Typeahead {
        input: Input,
        lookup: TypeaheadState,
    },
}

pub(super) struct FieldEditor {
    /// Property path from the form root, e.g. `["shipment", "eta"]`.
    pub(super) path: Vec<String>,
    pub(super) label: String,
    pub(super) required: bool,
    pub(super) kind: FieldKind,
}

impl FieldEditor {
    pub(super) fn path_key(&self) -> String {
        self.path.join(".")
    }
}

/// Flattened, editable view of one task form.
///
/// Fields come from walking the schema in declaration order; hidden fields
/// are left out but their data survives untouched because sync only writes
/// paths the editor owns.
pub(super) struct FormEditor {
    fields: Vec<FieldEditor>,
    focus: FocusTarget,
    action_count: usize,
    read_only: bool,
    pub(super) errors: ValidationErrors,
}

impl FormEditor {
    pub(super) fn new(presentation: &FormPresentation, data: &JsonObject) -> Self {
        let mut fields = Vec::new();
        if let Some(object) = presentation.schema.as_object() {
            let mut path = Vec::new();
            collect_fields(
                object,
                &presentation.ui_hints,
                data,
                &mut path,
                &mut fields,
            );
        }
        let focus = if fields.is_empty() && !presentation.actions.is_empty() {
            FocusTarget::Action(0)
        } else {
            FocusTarget::Field(0)
        };
        Self {
            fields,
            focus,
            action_count: presentation.actions.len(),
            read_only: presentation.read_only,
            errors: ValidationErrors::new(),
        }
    }

    pub(super) fn fields(&self) -> &[FieldEditor] {
        &self.fields
    }

    pub(super) fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub(super) fn read_only(&self) -> bool {
        self.read_only
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> EditEffect {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return EditEffect::Handled;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return EditEffect::Handled;
            }
            _ => {}
        }

        if self.read_only {
            return match key.code {
                KeyCode::Up => {
                    self.focus_prev();
                    EditEffect::Handled
                }
                KeyCode::Down => {
                    self.focus_next();
                    EditEffect::Handled
                }
                _ => EditEffect::Ignored,
            };
        }

        match self.focus {
            FocusTarget::Action(index) => match key.code {
                KeyCode::Enter => EditEffect::ActionActivated(index),
                KeyCode::Left | KeyCode::Up => {
                    self.focus_prev();
                    EditEffect::Handled
                }
                KeyCode::Right | KeyCode::Down => {
                    self.focus_next();
                    EditEffect::Handled
                }
                _ => EditEffect::Ignored,
            },
            FocusTarget::Field(index) => {
                let effect = match self.fields.get_mut(index) {
                    Some(field) => Self::handle_field_key(field, key),
                    None => EditEffect::Ignored,
                };
                match effect {
                    // Focus moves are decided here so the borrow on the
                    // field has already ended.
                    EditEffect::Ignored => match key.code {
                        KeyCode::Up => {
                            self.focus_prev();
                            EditEffect::Handled
                        }
                        KeyCode::Down => {
                            self.focus_next();
                            EditEffect::Handled
                        }
                        _ => EditEffect::Ignored,
                    },
                    other => other,
                }
            }
        }
    }

    fn handle_field_key(field: &mut FieldEditor, key: KeyEvent) -> EditEffect {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match &mut field.kind {
            FieldKind::Text { input, .. } => match text_input_request(key.code, ctrl) {
                Some(request) => apply_input_request(input, request),
                None => EditEffect::Ignored,
            },
            FieldKind::Typeahead { input, lookup } => {
                if lookup.has_suggestions() {
                    match key.code {
                        KeyCode::Up => {
                            lookup.move_selection(-1);
                            return EditEffect::Handled;
                        }
                        KeyCode::Down => {
                            lookup.move_selection(1);
                            return EditEffect::Handled;
                        }
                        KeyCode::Enter => {
                            if let Some(label) = lookup.selected_label() {
                                *input = Input::new(label);
                            }
                            lookup.clear();
                            return EditEffect::Changed;
                        }
                        KeyCode::Esc => {
                            lookup.clear();
                            return EditEffect::Handled;
                        }
                        _ => {}
                    }
                }
                let Some(request) = text_input_request(key.code, ctrl) else {
                    return EditEffect::Ignored;
                };
                match apply_input_request(input, request) {
                    EditEffect::Changed => {
                        let query = input.value().to_string();
                        if lookup.begin_search(&query) {
                            EditEffect::SearchRequested {
                                field: field.path.join("."),
                                category: lookup.category.clone(),
                                query,
                            }
                        } else {
                            EditEffect::Changed
                        }
                    }
                    other => other,
                }
            }
            FieldKind::TextArea { area } => match key.code {
                KeyCode::Char(c) if !ctrl => {
                    area.insert_char(c);
                    EditEffect::Changed
                }
                KeyCode::Enter => {
                    area.insert_newline();
                    EditEffect::Changed
                }
                KeyCode::Backspace => {
                    if area.delete_char() {
                        EditEffect::Changed
                    } else {
                        EditEffect::Handled
                    }
                }
                KeyCode::Delete => {
                    if area.delete_next_char() {
                        EditEffect::Changed
                    } else {
                        EditEffect::Handled
                    }
                }
                KeyCode::Left => {
                    area.move_cursor(CursorMove::Back);
                    EditEffect::Handled
                }
                KeyCode::Right => {
                    area.move_cursor(CursorMove::Forward);
                    EditEffect::Handled
                }
                KeyCode::Up => {
                    area.move_cursor(CursorMove::Up);
                    EditEffect::Handled
                }
                KeyCode::Down => {
                    area.move_cursor(CursorMove::Down);
                    EditEffect::Handled
                }
                KeyCode::Home => {
                    area.move_cursor(CursorMove::Head);
                    EditEffect::Handled
                }
                KeyCode::End => {
                    area.move_cursor(CursorMove::End);
                    EditEffect::Handled
                }
                _ => EditEffect::Ignored,
            },
            FieldKind::Bool { checked } => match key.code {
                KeyCode::Char(' ') => {
                    *checked = !*checked;
                    EditEffect::Changed
                }
                _ => EditEffect::Ignored,
            },
            FieldKind::Select {
                labels, selected, ..
            } => match key.code {
                KeyCode::Left => {
                    if labels.is_empty() {
                        return EditEffect::Handled;
                    }
                    *selected = Some(selected.map_or(0, |current| current.saturating_sub(1)));
                    EditEffect::Changed
                }
                KeyCode::Right => {
                    if labels.is_empty() {
                        return EditEffect::Handled;
                    }
                    let last = labels.len() - 1;
                    *selected = Some(selected.map_or(0, |current| (current + 1).min(last)));
                    EditEffect::Changed
                }
                _ => EditEffect::Ignored,
            },
        }
    }

    /// Write every editable field's current value into the form data.
    ///
    /// Cleared text removes its key; untouched hidden fields are never
    /// visited, so their saved values survive. Parent objects are created
    /// on demand and never pruned.
    pub(super) fn sync_into(&self, data: &mut JsonObject) {
        for field in &self.fields {
            let value = match &field.kind {
                FieldKind::Text { input, value_type } => {
                    typed_value(input.value(), *value_type)
                }
                FieldKind::Typeahead { input, .. } => typed_value(input.value(), ValueType::Text),
                FieldKind::TextArea { area } => {
                    let text = area.lines().join("\n");
                    if text.is_empty() {
                        None
                    } else {
                        Some(Value::String(text))
                    }
                }
                FieldKind::Bool { checked } => Some(Value::Bool(*checked)),
                FieldKind::Select {
                    values, selected, ..
                } => selected.and_then(|index| values.get(index).cloned()),
            };
            write_at_path(data, &field.path, value);
        }
    }

    /// Deliver a suggestion batch to the field that asked for it. Returns
    /// whether the batch was installed (stale batches are discarded).
    pub(super) fn apply_typeahead_results(
        &mut self,
        field_key: &str,
        query: &str,
        items: Vec<TypeaheadItem>,
    ) -> bool {
        for field in &mut self.fields {
            if field.path_key() == field_key
                && let FieldKind::Typeahead { lookup, .. } = &mut field.kind
            {
                return lookup.apply_results(query, items);
            }
        }
        false
    }

    pub(super) fn focus_next(&mut self) {
        let total = self.fields.len() + self.action_count;
        if total == 0 {
            return;
        }
        self.close_suggestions();
        self.set_focus_index((self.focus_index() + 1) % total);
    }

    pub(super) fn focus_prev(&mut self) {
        let total = self.fields.len() + self.action_count;
        if total == 0 {
            return;
        }
        self.close_suggestions();
        let current = self.focus_index();
        self.set_focus_index(if current == 0 { total - 1 } else { current - 1 });
    }

    fn focus_index(&self) -> usize {
        match self.focus {
            FocusTarget::Field(index) => index.min(self.fields.len().saturating_sub(1)),
            FocusTarget::Action(index) => self.fields.len() + index,
        }
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = if index < self.fields.len() {
            FocusTarget::Field(index)
        } else {
            FocusTarget::Action(index - self.fields.len())
        };
    }

    fn close_suggestions(&mut self) {
        if let FocusTarget::Field(index) = self.focus
            && let Some(field) = self.fields.get_mut(index)
            && let FieldKind::Typeahead { lookup, .. } = &mut field.kind
        {
            lookup.clear();
        }
    }
}

fn collect_fields(
    object: &ObjectSchema,
    hints: &UiHints,
    data: &JsonObject,
    path: &mut Vec<String>,
    fields: &mut Vec<FieldEditor>,
) {
    for (name, node) in &object.properties {
        if hints.field_widget(name) == Some(WIDGET_HIDDEN) {
            continue;
        }
        path.push(name.clone());
        match node {
            SchemaNode::Object(child) => {
                let child_hints = hints.field_hints(name).unwrap_or_default();
                let child_data = data
                    .get(name)
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default();
                collect_fields(child, &child_hints, &child_data, path, fields);
            }
            SchemaNode::Field(field) => {
                fields.push(build_field(
                    path.clone(),
                    name,
                    field,
                    hints,
                    object,
                    data.get(name),
                ));
            }
        }
        path.pop();
    }
}

fn build_field(
    path: Vec<String>,
    name: &str,
    field: &FieldSchema,
    hints: &UiHints,
    parent: &ObjectSchema,
    value: Option<&Value>,
) -> FieldEditor {
    let widget = hints.field_widget(name);
    let kind = if let Some(enum_values) = &field.enum_values {
        let selected = value.and_then(|current| {
            enum_values.iter().position(|candidate| candidate == current)
        });
        FieldKind::Select {
            labels: enum_values.iter().map(display_text).collect(),
            values: enum_values.clone(),
            selected,
        }
    } else if widget == Some(WIDGET_TYPEAHEAD)
        && let Some(options) = hints.typeahead_options(name)
    {
        FieldKind::Typeahead {
            input: Input::new(text_of(value)),
            lookup: TypeaheadState::new(&options),
        }
    } else if widget == Some(WIDGET_TEXTAREA) {
        let lines = text_of(value).lines().map(str::to_string).collect();
        FieldKind::TextArea {
            area: TextArea::new(lines),
        }
    } else if field.field_type.as_deref() == Some("boolean") {
        FieldKind::Bool {
            checked: value.and_then(Value::as_bool).unwrap_or(false),
        }
    } else {
        let value_type = match field.field_type.as_deref() {
            Some("integer") => ValueType::Integer,
            Some("number") => ValueType::Number,
            _ => ValueType::Text,
        };
        FieldKind::Text {
            input: Input::new(text_of(value)),
            value_type,
        }
    };

    FieldEditor {
        path,
        label: field.title.clone().unwrap_or_else(|| name.to_string()),
        required: parent.required.iter().any(|required| required == name),
        kind,
    }
}

fn text_input_request(code: KeyCode, ctrl: bool) -> Option<InputRequest> {
    match (code, ctrl) {
        (KeyCode::Char('w'), true) => Some(InputRequest::DeletePrevWord),
        (KeyCode::Char('u'), true) => Some(InputRequest::DeleteLine),
        (KeyCode::Char(c), false) => Some(InputRequest::InsertChar(c)),
        (KeyCode::Backspace, _) => Some(InputRequest::DeletePrevChar),
        (KeyCode::Delete, _) => Some(InputRequest::DeleteNextChar),
        (KeyCode::Left, _) => Some(InputRequest::GoToPrevChar),
        (KeyCode::Right, _) => Some(InputRequest::GoToNextChar),
        (KeyCode::Home, _) => Some(InputRequest::GoToStart),
        (KeyCode::End, _) => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

fn apply_input_request(input: &mut Input, request: InputRequest) -> EditEffect {
    match input.handle(request) {
        Some(change) if change.value => EditEffect::Changed,
        Some(_) => EditEffect::Handled,
        None => EditEffect::Handled,
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn display_text(value: &Value) -> String {
    text_of(Some(value))
}

/// A cleared number field falls back to the raw text so the server sees
/// what the user typed instead of a silently dropped value.
fn typed_value(text: &str, value_type: ValueType) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    match value_type {
        ValueType::Text => Some(Value::String(text.to_string())),
        ValueType::Integer => match text.parse::<i64>() {
            Ok(number) => Some(Value::Number(number.into())),
            Err(_) => Some(Value::String(text.to_string())),
        },
        ValueType::Number => match text.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
        {
            Some(number) => Some(Value::Number(number)),
            None => Some(Value::String(text.to_string())),
        },
    }
}

fn write_at_path(data: &mut JsonObject, path: &[String], value: Option<Value>) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };
    if rest.is_empty() {
        match value {
            Some(value) => {
                data.insert(head.clone(), value);
            }
            None => {
                data.remove(head);
            }
        }
        return;
    }
    if value.is_none() && !data.contains_key(head) {
        return;
    }
    let child = data
        .entry(head.clone())
        .or_insert_with(|| Value::Object(JsonObject::new()));
    if !child.is_object() {
        *child = Value::Object(JsonObject::new());
    }
    if let Value::Object(nested) = child {
        write_at_path(nested, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::MANUAL_TASK_MARKER;
    use serde_json::json;
    use taskdeck_adapter::Task;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(editor: &mut FormEditor, text: &str) {
        for c in text.chars() {
            editor.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn form_task() -> Task {
        serde_json::from_value(json!({
            "id": "task-1",
            "process_instance_id": 42,
            "process_model_identifier": "misc/orders",
            "name_for_display": "Approve order",
            "kind": "UserTask",
            "state": "READY",
            "can_complete": true,
            "form_schema": {
                "type": "object",
                "required": ["delivery_date"],
                "properties": {
                    "delivery_date": { "type": "string", "title": "Delivery date" },
                    "quantity": { "type": "integer" },
                    "approved": { "type": "boolean" },
                    "priority": { "type": "string", "enum": ["low", "high"] },
                    "notes": { "type": "string" },
                    "supplier": { "type": "string" },
                    "audit_token": { "type": "string" }
                }
            },
            "form_ui_schema": {
                "notes": { "ui:widget": "textarea" },
                "supplier": {
                    "ui:widget": "typeahead",
                    "ui:options": { "category": "suppliers", "itemFormat": "{name} ({city})" }
                },
                "audit_token": { "ui:widget": "hidden" }
            },
            "data": { "audit_token": "keep-me", "priority": "high" }
        }))
        .expect("task fixture should parse")
    }

    fn editor_for(task: &Task) -> (FormEditor, JsonObject) {
        let presentation = FormPresentation::derive(task, false);
        let data = task.data.clone().unwrap_or_default();
        (FormEditor::new(&presentation, &data), data)
    }

    #[test]
    fn fields_follow_schema_order_and_skip_hidden_ones() {
        let task = form_task();
        let (editor, _) = editor_for(&task);

        let labels: Vec<&str> = editor
            .fields()
            .iter()
            .map(|field| field.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Delivery date", "quantity", "approved", "priority", "notes", "supplier"]
        );
        assert!(editor.fields()[0].required);
        assert!(!editor.fields()[1].required);
    }

    #[test]
    fn typing_and_clearing_updates_form_data() {
        let task = form_task();
        let (mut editor, mut data) = editor_for(&task);

        type_text(&mut editor, "2025-07-01");
        editor.sync_into(&mut data);
        assert_eq!(data["delivery_date"], json!("2025-07-01"));
        // Hidden field data is untouched by sync.
        assert_eq!(data["audit_token"], json!("keep-me"));

        for _ in 0.."2025-07-01".len() {
            editor.handle_key(key(KeyCode::Backspace));
        }
        editor.sync_into(&mut data);
        assert!(!data.contains_key("delivery_date"));
    }

    #[test]
    fn integer_fields_parse_with_raw_text_fallback() {
        let task = form_task();
        let (mut editor, mut data) = editor_for(&task);

        editor.handle_key(key(KeyCode::Tab));
        type_text(&mut editor, "12");
        editor.sync_into(&mut data);
        assert_eq!(data["quantity"], json!(12));

        type_text(&mut editor, "x");
        editor.sync_into(&mut data);
        assert_eq!(data["quantity"], json!("12x"));
    }

    #[test]
    fn space_toggles_booleans_and_arrows_cycle_selects() {
        let task = form_task();
        let (mut editor, mut data) = editor_for(&task);

        editor.handle_key(key(KeyCode::Tab));
        editor.handle_key(key(KeyCode::Tab));
        editor.handle_key(key(KeyCode::Char(' ')));
        editor.sync_into(&mut data);
        assert_eq!(data["approved"], json!(true));

        editor.handle_key(key(KeyCode::Tab));
        // "priority" was saved as "high"; Left moves back to "low".
        editor.handle_key(key(KeyCode::Left));
        editor.sync_into(&mut data);
        assert_eq!(data["priority"], json!("low"));
    }

    #[test]
    fn textarea_joins_lines_on_sync() {
        let task = form_task();
        let (mut editor, mut data) = editor_for(&task);

        for _ in 0..4 {
            editor.handle_key(key(KeyCode::Tab));
        }
        type_text(&mut editor, "first");
        editor.handle_key(key(KeyCode::Enter));
        type_text(&mut editor, "second");
        editor.sync_into(&mut data);
        assert_eq!(data["notes"], json!("first\nsecond"));
    }

    #[test]
    fn typeahead_typing_requests_a_search_and_enter_accepts() {
        let task = form_task();
        let (mut editor, mut data) = editor_for(&task);

        for _ in 0..5 {
            editor.handle_key(key(KeyCode::Tab));
        }
        editor.handle_key(key(KeyCode::Char('a')));
        let effect = editor.handle_key(key(KeyCode::Char('c')));
        match effect {
            EditEffect::SearchRequested {
                field,
                category,
                query,
            } => {
                assert_eq!(field, "supplier");
                assert_eq!(category, "suppliers");
                assert_eq!(query, "ac");
            }
            other => panic!("expected a search request, got {other:?}"),
        }

        let item = |value: serde_json::Value| {
            let Value::Object(map) = value else {
                unreachable!()
            };
            map
        };
        // A stale batch is ignored, the current one lands.
        assert!(!editor.apply_typeahead_results(
            "supplier",
            "a",
            vec![item(json!({ "name": "Old", "city": "Gone" }))],
        ));
        assert!(editor.apply_typeahead_results(
            "supplier",
            "ac",
            vec![item(json!({ "name": "Acme", "city": "Oslo" }))],
        ));

        editor.handle_key(key(KeyCode::Enter));
        editor.sync_into(&mut data);
        assert_eq!(data["supplier"], json!("Acme (Oslo)"));
    }

    #[test]
    fn focus_wraps_through_fields_and_actions() {
        let task = form_task();
        let (mut editor, _) = editor_for(&task);

        // 6 editable fields, then Submit / Save and Close.
        for _ in 0..6 {
            editor.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(editor.focus(), FocusTarget::Action(0));
        match editor.handle_key(key(KeyCode::Enter)) {
            EditEffect::ActionActivated(0) => {}
            other => panic!("expected action activation, got {other:?}"),
        }

        editor.handle_key(key(KeyCode::BackTab));
        assert_eq!(editor.focus(), FocusTarget::Field(5));
    }

    #[test]
    fn read_only_editor_swallows_edits() {
        let mut task = form_task();
        task.state = serde_json::from_value(json!("COMPLETED")).unwrap();
        let presentation = FormPresentation::derive(&task, false);
        let mut data = task.data.clone().unwrap_or_default();
        let mut editor = FormEditor::new(&presentation, &data);

        assert!(editor.read_only());
        assert!(matches!(
            editor.handle_key(key(KeyCode::Char('z'))),
            EditEffect::Ignored
        ));
        editor.sync_into(&mut data);
        assert!(!data.contains_key("delivery_date"));
    }

    #[test]
    fn manual_task_editor_has_no_fields_and_focuses_the_action() {
        let task: Task = serde_json::from_value(json!({
            "id": "task-2",
            "process_instance_id": 42,
            "process_model_identifier": "misc/manual",
            "name_for_display": "Read the notice",
            "kind": "ManualTask",
            "state": "READY",
            "can_complete": true
        }))
        .unwrap();
        let presentation = FormPresentation::derive(&task, false);
        let mut data = JsonObject::new();
        crate::controller::seed_defaults(&presentation.schema, &mut data);
        let mut editor = FormEditor::new(&presentation, &data);

        assert!(editor.fields().is_empty());
        assert_eq!(editor.focus(), FocusTarget::Action(0));
        assert_eq!(data[MANUAL_TASK_MARKER], json!(true));
        assert!(matches!(
            editor.handle_key(key(KeyCode::Enter)),
            EditEffect::ActionActivated(0)
        ));
    }

    #[test]
    fn nested_fields_sync_through_their_parent_object() {
        let task: Task = serde_json::from_value(json!({
            "id": "task-3",
            "process_instance_id": 42,
            "process_model_identifier": "misc/orders",
            "name_for_display": "Ship order",
            "kind": "UserTask",
            "state": "READY",
            "can_complete": true,
            "form_schema": {
                "type": "object",
                "properties": {
                    "shipment": {
                        "type": "object",
                        "properties": {
                            "carrier": { "type": "string" }
                        }
                    }
                }
            }
        }))
        .unwrap();
        let (mut editor, mut data) = editor_for(&task);

        assert_eq!(editor.fields()[0].path_key(), "shipment.carrier");
        type_text(&mut editor, "postal");
        editor.sync_into(&mut data);
        assert_eq!(data["shipment"], json!({ "carrier": "postal" }));
    }
}

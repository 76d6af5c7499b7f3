/*
[INPUT]:  JSON-schema-like form definitions and UI hint objects from the API
[OUTPUT]: Typed schema tree and UI hint accessors
[POS]:    Data layer - form schema definitions
[UPDATE]: When the form schema vocabulary grows new keywords
*/

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whole-form read-only switch understood by the renderer.
pub const UI_READONLY_KEY: &str = "ui:readonly";
/// Per-field widget override key.
pub const UI_WIDGET_KEY: &str = "ui:widget";
/// Per-field widget options key.
pub const UI_OPTIONS_KEY: &str = "ui:options";

/// Widget names the renderer knows about.
pub const WIDGET_HIDDEN: &str = "hidden";
pub const WIDGET_TEXTAREA: &str = "textarea";
pub const WIDGET_TYPEAHEAD: &str = "typeahead";

/// One node of a task's form schema.
///
/// A node carrying a `properties` key is an object; everything else is a
/// leaf field. Keeping the two shapes in one sum lets the date-constraint
/// walker and the form renderer traverse schemas exhaustively instead of
/// probing untyped maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Object(ObjectSchema),
    Field(FieldSchema),
}

impl SchemaNode {
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            SchemaNode::Object(object) => Some(object),
            SchemaNode::Field(_) => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldSchema> {
        match self {
            SchemaNode::Field(field) => Some(field),
            SchemaNode::Object(_) => None,
        }
    }

    /// An object schema with no properties; used when a task carries no form.
    pub fn empty_object() -> Self {
        SchemaNode::Object(ObjectSchema::default())
    }
}

/// Object node: named, ordered child properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    pub properties: IndexMap<String, SchemaNode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Leaf field node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(
        rename = "minimumDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_date: Option<MinimumDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Date floor constraint carried by a leaf field.
///
/// `today` is the only value the engine emits: the field's calendar date
/// must not be before the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinimumDate {
    Today,
}

/// Read a JSON value as a calendar date.
///
/// Accepts plain `YYYY-MM-DD` strings and RFC 3339 timestamps; a timestamp
/// is reduced to its UTC calendar date. Anything else yields `None`.
pub fn calendar_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?;
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// UI-hint schema attached to a task: free-form JSON mirroring the field
/// nesting, with `ui:`-prefixed keys at each level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiHints(pub Map<String, Value>);

impl UiHints {
    /// Merge the whole-form read-only switch into the hints, keeping every
    /// other key intact.
    pub fn mark_read_only(&mut self) {
        self.0.insert(UI_READONLY_KEY.to_string(), Value::Bool(true));
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.0.get(UI_READONLY_KEY), Some(Value::Bool(true)))
    }

    /// Hide a single field by name.
    pub fn hide_field(&mut self, name: &str) {
        let mut widget = Map::new();
        widget.insert(
            UI_WIDGET_KEY.to_string(),
            Value::String(WIDGET_HIDDEN.to_string()),
        );
        self.0.insert(name.to_string(), Value::Object(widget));
    }

    /// The hint subtree for a named field, if present.
    pub fn field_hints(&self, name: &str) -> Option<UiHints> {
        self.0
            .get(name)
            .and_then(Value::as_object)
            .cloned()
            .map(UiHints)
    }

    /// The widget name declared for a named field.
    pub fn field_widget(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)?
            .as_object()?
            .get(UI_WIDGET_KEY)?
            .as_str()
    }

    /// Typeahead binding for a named field, when its widget declares one.
    pub fn typeahead_options(&self, name: &str) -> Option<TypeaheadOptions> {
        let options = self.0.get(name)?.as_object()?.get(UI_OPTIONS_KEY)?;
        serde_json::from_value(options.clone()).ok()
    }
}

/// Options of a typeahead widget: the remote search category and the
/// display template, e.g. `"{name} ({city})"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeaheadOptions {
    pub category: String,
    #[serde(rename = "itemFormat")]
    pub item_format: String,
}

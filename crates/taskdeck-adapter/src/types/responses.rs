/*
[INPUT]:  Raw JSON bodies returned by submission and typeahead endpoints
[OUTPUT]: Typed response envelopes
[POS]:    Data layer - response models
[UPDATE]: When submission responses grow new routing fields
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One suggestion returned by the typeahead proxy. The shape is defined by
/// the remote data source, so it stays an open map; the widget's item
/// format decides which keys are displayed.
pub type TypeaheadItem = Map<String, Value>;

/// Body returned by a task submission or a user signal.
///
/// The engine answers in one of three shapes: a plain acknowledgement
/// (`ok`), a reference to the next task for the same user, or something
/// else entirely. Every field is optional so callers can branch on what is
/// actually present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<i64>,
    /// Identifier of the referenced task, when the response is task-like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_model_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_complete: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmitReceipt {
    /// True only for an explicit `"ok": true` acknowledgement.
    pub fn is_plain_ok(&self) -> bool {
        self.ok == Some(true)
    }

    /// The receipt re-assembled as raw JSON, for surfacing unrecognized
    /// shapes to the user.
    pub fn raw(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

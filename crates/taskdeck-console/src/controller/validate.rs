/*
[INPUT]:  Form schema tree plus the data the user is about to submit
[OUTPUT]: Per-field validation errors keyed by property path
[POS]:    Controller layer - pre-submit checks
[UPDATE]: When new client-side constraints are added
*/

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_json::Value;
use taskdeck_adapter::{JsonObject, SchemaNode, calendar_date};

/// Message attached to a date field that fails its floor check.
pub const MINIMUM_DATE_ERROR: &str = "must be today or after";

/// Validation results shaped like the form data itself: messages at this
/// level plus one nested node per object property that has problems below.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
    pub children: IndexMap<String, ValidationErrors>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only when this node and everything beneath it is clean.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(|child| child.is_empty())
    }

    pub fn child_mut(&mut self, name: &str) -> &mut ValidationErrors {
        self.children.entry(name.to_string()).or_default()
    }

    /// Messages recorded at a dotted property path, if any.
    pub fn at_path(&self, path: &[String]) -> &[String] {
        let mut node = self;
        for segment in path {
            match node.children.get(segment) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.errors
    }
}

/// Validate submitted form data against the task's schema.
pub fn validate_form(schema: &SchemaNode, data: &JsonObject, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_minimum_dates(schema, Some(&Value::Object(data.clone())), &mut errors, today);
    errors
}

/// Walk schema and data together, flagging date fields whose value falls
/// before the allowed floor. Fields without a parseable value are left to
/// the server.
pub fn check_minimum_dates(
    schema: &SchemaNode,
    value: Option<&Value>,
    errors: &mut ValidationErrors,
    today: NaiveDate,
) {
    match schema {
        SchemaNode::Field(field) => {
            if field.minimum_date.is_none() {
                return;
            }
            let Some(date) = value.and_then(calendar_date) else {
                return;
            };
            if date < today {
                errors.errors.push(MINIMUM_DATE_ERROR.to_string());
            }
        }
        SchemaNode::Object(object) => {
            for (name, child_schema) in &object.properties {
                let child_value = value.and_then(|v| v.get(name));
                check_minimum_dates(child_schema, child_value, errors.child_mut(name), today);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn delivery_schema() -> SchemaNode {
        serde_json::from_value(json!({
            "type": "object",
            "properties": {
                "delivery_date": {
                    "type": "string",
                    "format": "date",
                    "minimumDate": "today"
                },
                "notes": { "type": "string" }
            }
        }))
        .unwrap()
    }

    fn form(date: &str) -> JsonObject {
        let Value::Object(map) = json!({ "delivery_date": date }) else {
            unreachable!()
        };
        map
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[rstest]
    #[case("2025-06-14", false)]
    #[case("2025-06-15", true)]
    #[case("2025-06-16", true)]
    fn date_floor_is_inclusive_of_today(#[case] date: &str, #[case] accepted: bool) {
        let errors = validate_form(&delivery_schema(), &form(date), today());
        assert_eq!(errors.is_empty(), accepted, "date {date}");
        if !accepted {
            assert_eq!(
                errors.at_path(&["delivery_date".to_string()]),
                &[MINIMUM_DATE_ERROR.to_string()]
            );
        }
    }

    #[test]
    fn timestamps_are_compared_by_their_utc_calendar_date() {
        let errors = validate_form(&delivery_schema(), &form("2025-06-14T23:59:00Z"), today());
        assert!(!errors.is_empty());

        let errors = validate_form(&delivery_schema(), &form("2025-06-15T00:00:00Z"), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_or_unparseable_values_are_not_flagged() {
        let errors = validate_form(&delivery_schema(), &JsonObject::new(), today());
        assert!(errors.is_empty());

        let errors = validate_form(&delivery_schema(), &form("not a date"), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn nested_objects_collect_errors_under_their_property_path() {
        let schema: SchemaNode = serde_json::from_value(json!({
            "type": "object",
            "properties": {
                "shipment": {
                    "type": "object",
                    "properties": {
                        "eta": { "type": "string", "minimumDate": "today" }
                    }
                }
            }
        }))
        .unwrap();
        let Value::Object(data) = json!({ "shipment": { "eta": "2025-06-01" } }) else {
            unreachable!()
        };

        let errors = validate_form(&schema, &data, today());
        assert!(!errors.is_empty());
        assert_eq!(
            errors.at_path(&["shipment".to_string(), "eta".to_string()]),
            &[MINIMUM_DATE_ERROR.to_string()]
        );
        assert!(errors.at_path(&["shipment".to_string()]).is_empty());
    }

    #[test]
    fn fields_without_a_floor_are_ignored() {
        let Value::Object(data) = json!({ "notes": "1999-01-01" }) else {
            unreachable!()
        };
        let errors = validate_form(&delivery_schema(), &data, today());
        assert!(errors.is_empty());
    }
}

/*
[INPUT]:  Task session state and submission receipts from the API
[OUTPUT]: Submission plans and post-submit navigation decisions
[POS]:    Controller layer - submit dispatch and response routing
[UPDATE]: When submission rules or receipt shapes change
*/

use chrono::NaiveDate;
use taskdeck_adapter::{JsonObject, SubmitReceipt};

use super::nav::Destination;
use super::presentation::{MANUAL_TASK_MARKER, effective_schema};
use super::session::TaskSession;
use super::validate::{ValidationErrors, validate_form};

/// Outcome of planning a form submission.
///
/// `plan_form_submit` returns `None` when the attempt is dropped because
/// another submission is still in flight.
#[derive(Debug, PartialEq)]
pub enum SubmitPlan {
    /// Nothing to send; go straight to this destination.
    Navigate(Destination),
    /// Client-side validation failed; render these inline.
    Reject(ValidationErrors),
    /// Send this payload to the API.
    Send {
        data: JsonObject,
        save_as_draft: bool,
    },
}

/// Decide what a form submit attempt should do, without performing it.
///
/// An empty payload is checked before the acknowledgement marker is
/// stripped, so manual-task submissions still reach the network. The date
/// walker runs unless the session's save-and-close flag disabled it; that
/// flag also turns the submission into a draft.
pub fn plan_form_submit(session: &TaskSession, today: NaiveDate) -> Option<SubmitPlan> {
    if session.submitting {
        return None;
    }
    if session.form_data.is_empty() {
        return Some(SubmitPlan::Navigate(Destination::TaskList));
    }

    let mut data = session.form_data.clone();
    data.remove(MANUAL_TASK_MARKER);

    if !session.validation_disabled
        && let Some(task) = &session.task
    {
        let errors = validate_form(&effective_schema(task), &data, today);
        if !errors.is_empty() {
            return Some(SubmitPlan::Reject(errors));
        }
    }

    Some(SubmitPlan::Send {
        data,
        save_as_draft: session.validation_disabled,
    })
}

/// Where a finished submission sends the user next.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDisposition {
    Navigate(Destination),
    /// 2xx body that matches no known shape; shown on the banner.
    Error(String),
}

/// Route a successful submission response.
///
/// A plain acknowledgement returns to the task list. A task-like receipt
/// opens the referenced task when the user can complete it, otherwise the
/// instance's interstitial; receipts without a model identifier fall back
/// to the model of the task just submitted.
pub fn route_submit_receipt(receipt: &SubmitReceipt, current_model_id: &str) -> SubmitDisposition {
    if receipt.is_plain_ok() {
        return SubmitDisposition::Navigate(Destination::TaskList);
    }
    let Some(process_instance_id) = receipt.process_instance_id else {
        return SubmitDisposition::Error(receipt.raw().to_string());
    };
    if receipt.can_complete == Some(true)
        && let Some(task_id) = &receipt.id
    {
        return SubmitDisposition::Navigate(Destination::TaskDetail {
            process_instance_id,
            task_id: task_id.clone(),
        });
    }
    SubmitDisposition::Navigate(Destination::Interstitial {
        process_model_id: receipt
            .process_model_identifier
            .clone()
            .unwrap_or_else(|| current_model_id.to_string()),
        process_instance_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use taskdeck_adapter::Task;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn session_with_task(kind: &str, schema: Value, data: Value) -> TaskSession {
        let task: Task = serde_json::from_value(json!({
            "id": "task-1",
            "process_instance_id": 42,
            "process_model_identifier": "misc/orders",
            "name_for_display": "Approve order",
            "kind": kind,
            "state": "READY",
            "can_complete": true,
            "form_schema": schema,
            "data": data
        }))
        .expect("task fixture should parse");
        let mut session = TaskSession::new(42, "task-1");
        session.apply_fetched(task);
        session
    }

    fn date_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "delivery_date": { "type": "string", "minimumDate": "today" }
            }
        })
    }

    #[test]
    fn in_flight_submission_drops_the_attempt() {
        let mut session = session_with_task("UserTask", date_schema(), json!({ "x": 1 }));
        session.submitting = true;
        assert_eq!(plan_form_submit(&session, today()), None);
    }

    #[test]
    fn empty_payload_navigates_without_sending() {
        let mut session = TaskSession::new(42, "task-1");
        session.form_data = JsonObject::new();
        assert_eq!(
            plan_form_submit(&session, today()),
            Some(SubmitPlan::Navigate(Destination::TaskList))
        );
    }

    #[test]
    fn marker_is_stripped_but_keeps_the_payload_non_empty() {
        let mut session = TaskSession::new(42, "task-2");
        session.form_data.insert(MANUAL_TASK_MARKER.to_string(), json!(true));

        match plan_form_submit(&session, today()) {
            Some(SubmitPlan::Send {
                data,
                save_as_draft,
            }) => {
                assert!(data.is_empty());
                assert!(!save_as_draft);
            }
            other => panic!("expected a send plan, got {other:?}"),
        }
    }

    #[test]
    fn past_date_rejects_the_submission_inline() {
        let session = session_with_task(
            "UserTask",
            date_schema(),
            json!({ "delivery_date": "2025-06-01" }),
        );

        match plan_form_submit(&session, today()) {
            Some(SubmitPlan::Reject(errors)) => {
                assert!(!errors.is_empty());
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[test]
    fn disabled_validation_sends_a_draft_despite_past_dates() {
        let mut session = session_with_task(
            "UserTask",
            date_schema(),
            json!({ "delivery_date": "2025-06-01" }),
        );
        session.validation_disabled = true;

        match plan_form_submit(&session, today()) {
            Some(SubmitPlan::Send {
                data,
                save_as_draft,
            }) => {
                assert_eq!(data["delivery_date"], json!("2025-06-01"));
                assert!(save_as_draft);
            }
            other => panic!("expected a draft send, got {other:?}"),
        }
    }

    #[test]
    fn plain_ok_receipt_returns_to_the_task_list() {
        let receipt: SubmitReceipt = serde_json::from_value(json!({ "ok": true })).unwrap();
        assert_eq!(
            route_submit_receipt(&receipt, "misc/orders"),
            SubmitDisposition::Navigate(Destination::TaskList)
        );
    }

    #[test]
    fn completable_receipt_opens_the_referenced_task() {
        let receipt: SubmitReceipt = serde_json::from_value(json!({
            "id": "next-task",
            "process_instance_id": 99,
            "can_complete": true
        }))
        .unwrap();
        assert_eq!(
            route_submit_receipt(&receipt, "misc/orders"),
            SubmitDisposition::Navigate(Destination::TaskDetail {
                process_instance_id: 99,
                task_id: "next-task".to_string(),
            })
        );
    }

    #[test]
    fn non_completable_receipt_goes_to_the_interstitial() {
        let receipt: SubmitReceipt = serde_json::from_value(json!({
            "process_instance_id": 99,
            "process_model_identifier": "misc/other"
        }))
        .unwrap();
        assert_eq!(
            route_submit_receipt(&receipt, "misc/orders"),
            SubmitDisposition::Navigate(Destination::Interstitial {
                process_model_id: "misc/other".to_string(),
                process_instance_id: 99,
            })
        );
    }

    #[test]
    fn receipt_without_model_id_falls_back_to_the_current_one() {
        let receipt: SubmitReceipt =
            serde_json::from_value(json!({ "process_instance_id": 99 })).unwrap();
        assert_eq!(
            route_submit_receipt(&receipt, "misc/orders"),
            SubmitDisposition::Navigate(Destination::Interstitial {
                process_model_id: "misc/orders".to_string(),
                process_instance_id: 99,
            })
        );
    }

    #[test]
    fn unrecognized_receipt_surfaces_its_raw_body() {
        let receipt: SubmitReceipt =
            serde_json::from_value(json!({ "status": "queued" })).unwrap();
        match route_submit_receipt(&receipt, "misc/orders") {
            SubmitDisposition::Error(body) => assert!(body.contains("queued")),
            other => panic!("expected an error disposition, got {other:?}"),
        }
    }
}

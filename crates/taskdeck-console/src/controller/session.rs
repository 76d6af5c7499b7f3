/*
[INPUT]:  Route identifiers and fetched tasks
[OUTPUT]: Per-task editing session: task, form data, submit lifecycle flags
[POS]:    Controller layer - task session state
[UPDATE]: When the submit lifecycle grows new states
*/

use taskdeck_adapter::{JsonObject, Task};

use super::nav::Destination;

/// Mutable state of one open task screen.
///
/// Owned by the screen that shows the task; every controller helper takes
/// the session explicitly instead of reaching for ambient globals.
#[derive(Debug)]
pub struct TaskSession {
    pub process_instance_id: i64,
    pub task_id: String,
    /// Fetched task, absent until the first fetch lands.
    pub task: Option<Task>,
    pub form_data: JsonObject,
    /// True while a submission round trip is outstanding.
    pub submitting: bool,
    /// One-shot switch armed by save-and-close; consumed by the next submit.
    pub validation_disabled: bool,
}

impl TaskSession {
    pub fn new(process_instance_id: i64, task_id: impl Into<String>) -> Self {
        Self {
            process_instance_id,
            task_id: task_id.into(),
            task: None,
            form_data: JsonObject::new(),
            submitting: false,
            validation_disabled: false,
        }
    }

    /// Install a fetched task and its saved form data.
    ///
    /// Returns a redirect when the viewer cannot complete the task and
    /// should watch the instance's interstitial instead.
    pub fn apply_fetched(&mut self, task: Task) -> Option<Destination> {
        self.submitting = false;
        self.form_data = task.data.clone().unwrap_or_default();
        let redirect = if task.can_complete {
            None
        } else {
            Some(Destination::Interstitial {
                process_model_id: task.process_model_identifier.clone(),
                process_instance_id: task.process_instance_id,
            })
        };
        self.task = Some(task);
        redirect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_with(can_complete: bool) -> Task {
        serde_json::from_value(json!({
            "id": "task-1",
            "process_instance_id": 42,
            "process_model_identifier": "misc/category/orders",
            "name_for_display": "Approve order",
            "kind": "UserTask",
            "state": "READY",
            "can_complete": can_complete,
            "data": { "approved": true }
        }))
        .expect("task fixture should parse")
    }

    #[test]
    fn completable_task_is_stored_without_redirect() {
        let mut session = TaskSession::new(42, "task-1");
        session.submitting = true;

        let redirect = session.apply_fetched(task_with(true));

        assert!(redirect.is_none());
        assert!(!session.submitting);
        assert_eq!(session.form_data["approved"], json!(true));
        assert!(session.task.is_some());
    }

    #[test]
    fn non_completable_task_redirects_to_the_interstitial() {
        let mut session = TaskSession::new(42, "task-1");

        let redirect = session.apply_fetched(task_with(false));

        assert_eq!(
            redirect,
            Some(Destination::Interstitial {
                process_model_id: "misc/category/orders".to_string(),
                process_instance_id: 42,
            })
        );
    }
}

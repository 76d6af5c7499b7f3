/*
[INPUT]:  Task identifiers and form payloads
[OUTPUT]: Task read, list, submit and signal calls
[POS]:    HTTP layer - task endpoints
[UPDATE]: When task endpoints change shape
*/

use reqwest::Method;
use serde_json::Value;

use super::client::WorkflowClient;
use super::error::Result;
use crate::types::{JsonObject, SubmitReceipt, Task, TaskListPage};

impl WorkflowClient {
    /// Read one task inside a process instance.
    ///
    /// `GET /tasks/{process_instance_id}/{task_id}`
    pub async fn get_task(&self, process_instance_id: i64, task_id: &str) -> Result<Task> {
        let endpoint = format!("/tasks/{process_instance_id}/{task_id}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// List open tasks assigned to the current user.
    ///
    /// `GET /tasks?page={page}&per_page={per_page}`
    pub async fn list_open_tasks(&self, page: u32, per_page: u32) -> Result<TaskListPage> {
        let endpoint = format!("/tasks?page={page}&per_page={per_page}");
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Submit form data for a task, either completing it or, with
    /// `save_as_draft`, storing the data without progressing the process.
    ///
    /// `PUT /tasks/{process_instance_id}/{task_id}[?save_as_draft=true]`
    pub async fn submit_task_data(
        &self,
        process_instance_id: i64,
        task_id: &str,
        data: &JsonObject,
        save_as_draft: bool,
    ) -> Result<SubmitReceipt> {
        let mut endpoint = format!("/tasks/{process_instance_id}/{task_id}");
        if save_as_draft {
            endpoint.push_str("?save_as_draft=true");
        }
        let builder = self.api_request(Method::PUT, &endpoint)?.json(data);
        self.send_json(builder).await
    }

    /// Post a signal event into a process instance. The event descriptor
    /// comes from a task's signal button and is forwarded verbatim.
    ///
    /// `POST /tasks/{process_instance_id}/send-user-signal-event`
    pub async fn send_user_signal(
        &self,
        process_instance_id: i64,
        event: &Value,
    ) -> Result<SubmitReceipt> {
        let endpoint = format!("/tasks/{process_instance_id}/send-user-signal-event");
        let builder = self.api_request(Method::POST, &endpoint)?.json(event);
        self.send_json(builder).await
    }
}

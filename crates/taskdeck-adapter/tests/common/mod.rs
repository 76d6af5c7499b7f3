#![allow(dead_code)]

use serde_json::{json, Value};
use taskdeck_adapter::{ClientConfig, WorkflowClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// Mock server plus a client pointed at it, with a bearer token set.
pub async fn setup_client() -> (MockServer, WorkflowClient) {
    let server = MockServer::start().await;
    let mut client =
        WorkflowClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client should build against mock server");
    client.set_api_token(TEST_TOKEN);
    (server, client)
}

pub fn ready_user_task_json() -> Value {
    json!({
        "id": "task-abc",
        "process_instance_id": 42,
        "process_model_identifier": "misc/category/orders",
        "process_model_display_name": "Orders",
        "name_for_display": "Approve order",
        "kind": "UserTask",
        "state": "READY",
        "can_complete": true,
        "form_schema": {
            "type": "object",
            "required": ["delivery_date"],
            "properties": {
                "delivery_date": {
                    "type": "string",
                    "format": "date",
                    "title": "Delivery date",
                    "minimumDate": "today"
                },
                "notes": { "type": "string", "title": "Notes" }
            }
        },
        "form_ui_schema": {
            "notes": { "ui:widget": "textarea" }
        },
        "data": { "notes": "rush order" },
        "signal_buttons": [
            { "label": "Escalate", "event": { "name": "escalate_order" } }
        ]
    })
}

pub fn manual_task_json() -> Value {
    json!({
        "id": "task-manual",
        "process_instance_id": 42,
        "process_model_identifier": "misc/category/orders",
        "name_for_display": "Read the shipping notice",
        "kind": "ManualTask",
        "state": "READY",
        "can_complete": true
    })
}

pub fn completed_task_json() -> Value {
    json!({
        "id": "task-done",
        "process_instance_id": 42,
        "process_model_identifier": "misc/category/orders",
        "name_for_display": "Approve order",
        "kind": "UserTask",
        "state": "COMPLETED",
        "can_complete": false,
        "form_schema": {
            "type": "object",
            "properties": {
                "approved": { "type": "boolean", "title": "Approved" }
            }
        },
        "data": { "approved": true }
    })
}

pub fn task_list_page_json() -> Value {
    json!({
        "results": [ready_user_task_json(), manual_task_json()],
        "pagination": { "count": 2, "pages": 1, "total": 2 }
    })
}

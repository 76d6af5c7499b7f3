mod common;

use serde_json::json;
use taskdeck_adapter::{MinimumDate, TaskKind, TaskState, WorkflowError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{
    completed_task_json, ready_user_task_json, setup_client, task_list_page_json, TEST_TOKEN,
};

#[tokio::test]
async fn get_task_returns_typed_task() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/tasks/42/task-abc"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ready_user_task_json()))
        .expect(1)
        .mount(&server)
        .await;

    let task = client
        .get_task(42, "task-abc")
        .await
        .expect("task should load");

    assert_eq!(task.id, "task-abc");
    assert_eq!(task.process_instance_id, 42);
    assert_eq!(task.kind, TaskKind::UserTask);
    assert_eq!(task.state, TaskState::Ready);
    assert!(task.can_complete);

    let schema = task.form_schema.expect("schema should be present");
    let object = schema.as_object().expect("root should be an object");
    let date = object.properties["delivery_date"]
        .as_field()
        .expect("date field");
    assert_eq!(date.minimum_date, Some(MinimumDate::Today));

    let hints = task.form_ui_schema.expect("ui schema should be present");
    assert_eq!(hints.field_widget("notes"), Some("textarea"));
    assert_eq!(task.signal_buttons[0].label, "Escalate");
}

#[tokio::test]
async fn get_task_maps_error_body_to_api_error() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/tasks/42/task-gone"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error_code": "task_not_assigned",
            "message": "this task is assigned to someone else"
        })))
        .mount(&server)
        .await;

    let err = client
        .get_task(42, "task-gone")
        .await
        .expect_err("request should fail");

    match err {
        WorkflowError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "this task is assigned to someone else");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_task_maps_plain_text_error_body() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/tasks/42/task-abc"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client
        .get_task(42, "task-abc")
        .await
        .expect_err("request should fail");

    assert_eq!(err.to_string(), "API error (status 502): upstream down");
}

#[tokio::test]
async fn list_open_tasks_sends_paging_params() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_list_page_json()))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .list_open_tasks(1, 25)
        .await
        .expect("list should load");

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.results[1].kind, TaskKind::ManualTask);
}

#[tokio::test]
async fn submit_task_data_puts_form_payload() {
    let (server, client) = setup_client().await;
    let payload = json!({ "delivery_date": "2026-09-01", "notes": "rush order" });

    Mock::given(method("PUT"))
        .and(path("/tasks/42/task-abc"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let body = payload.as_object().expect("payload is an object").clone();
    let receipt = client
        .submit_task_data(42, "task-abc", &body, false)
        .await
        .expect("submission should succeed");

    assert!(receipt.is_plain_ok());
}

#[tokio::test]
async fn submit_task_data_as_draft_adds_query_flag() {
    let (server, client) = setup_client().await;

    Mock::given(method("PUT"))
        .and(path("/tasks/42/task-abc"))
        .and(query_param("save_as_draft", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({ "notes": "half-finished" })
        .as_object()
        .expect("payload is an object")
        .clone();
    let receipt = client
        .submit_task_data(42, "task-abc", &body, true)
        .await
        .expect("draft submission should succeed");

    assert!(receipt.is_plain_ok());
}

#[tokio::test]
async fn submit_task_data_returns_next_task_receipt() {
    let (server, client) = setup_client().await;

    Mock::given(method("PUT"))
        .and(path("/tasks/42/task-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "task-next",
            "process_instance_id": 42,
            "process_model_identifier": "misc/category/orders",
            "can_complete": true
        })))
        .mount(&server)
        .await;

    let body = json!({ "approved": true })
        .as_object()
        .expect("payload is an object")
        .clone();
    let receipt = client
        .submit_task_data(42, "task-abc", &body, false)
        .await
        .expect("submission should succeed");

    assert!(!receipt.is_plain_ok());
    assert_eq!(receipt.id.as_deref(), Some("task-next"));
    assert_eq!(receipt.process_instance_id, Some(42));
    assert_eq!(receipt.can_complete, Some(true));
}

#[tokio::test]
async fn send_user_signal_posts_event_verbatim() {
    let (server, client) = setup_client().await;
    let event = json!({ "name": "escalate_order", "payload": { "level": 2 } });

    Mock::given(method("POST"))
        .and(path("/tasks/42/send-user-signal-event"))
        .and(body_json(event.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client
        .send_user_signal(42, &event)
        .await
        .expect("signal should succeed");

    assert!(receipt.is_plain_ok());
}

#[tokio::test]
async fn typeahead_search_encodes_prefix_and_limit() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/connector-proxy/typeahead/suppliers"))
        .and(query_param("prefix", "acme co"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Acme Co", "city": "Portland" },
            { "name": "Acme Corp", "city": "Austin" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = client
        .typeahead_search("suppliers", "acme co", 100)
        .await
        .expect("search should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("name"), Some(&json!("Acme Co")));
}

#[tokio::test]
async fn completed_task_round_trips_read_only_fields() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/tasks/42/task-done"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completed_task_json()))
        .mount(&server)
        .await;

    let task = client
        .get_task(42, "task-done")
        .await
        .expect("task should load");

    assert_eq!(task.state, TaskState::Completed);
    assert!(!task.can_complete);
    assert!(!task.state.is_ready());
    let data = task.data.expect("saved data should be present");
    assert_eq!(data.get("approved"), Some(&json!(true)));
}

/*
[INPUT]:  Routing decisions made by the task controller
[OUTPUT]: Destination enum and web-parity route paths
[POS]:    Controller layer - navigation targets
[UPDATE]: When adding screens or changing route shapes
*/

/// Where the controller wants the user to go next.
///
/// The console's screen switcher consumes these; `route_path` renders the
/// same paths the web frontend uses, for logs and the breadcrumb line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Open-task listing.
    TaskList,
    /// One task's form screen.
    TaskDetail {
        process_instance_id: i64,
        task_id: String,
    },
    /// Waiting screen for a task the user cannot act on yet.
    Interstitial {
        /// Raw slash-separated process model identifier; normalized on render.
        process_model_id: String,
        process_instance_id: i64,
    },
}

impl Destination {
    pub fn route_path(&self) -> String {
        match self {
            Destination::TaskList => "/tasks".to_string(),
            Destination::TaskDetail {
                process_instance_id,
                task_id,
            } => format!("/tasks/{process_instance_id}/{task_id}"),
            Destination::Interstitial {
                process_model_id,
                process_instance_id,
            } => format!(
                "/admin/process-instances/{}/{process_instance_id}/interstitial",
                normalize_process_model_id(process_model_id)
            ),
        }
    }
}

/// Make a process model identifier path-safe by replacing its group
/// separators, mirroring what the backend expects in URLs.
pub fn normalize_process_model_id(id: &str) -> String {
    id.replace('/', ":")
}

/*
[INPUT]:  Navigation requests, key-driven commands, and async API results
[OUTPUT]: Screen state transitions and spawned API calls
[POS]:    TUI application state, owned by the runtime event loop
[UPDATE]: When screens or async flows are added
*/

use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use taskdeck_adapter::{
    SubmitReceipt, Task, TaskListPage, TypeaheadItem, WorkflowClient, WorkflowError,
};

use crate::controller::{
    Destination, ErrorBanner, FormPresentation, SubmitDisposition, SubmitPlan, TaskSession,
    ValidationErrors, plan_form_submit, route_submit_receipt, seed_defaults,
};
use crate::tui::editor::FormEditor;
use crate::tui::runtime::LogBufferHandle;

/// How many suggestions a typeahead request asks for.
const TYPEAHEAD_LIMIT: u32 = 100;

/// Results of API calls spawned off the event loop.
pub(super) enum AppEvent {
    TasksListed(Result<TaskListPage, WorkflowError>),
    TaskFetched {
        result: Result<Task, WorkflowError>,
    },
    SubmitFinished(Result<SubmitReceipt, WorkflowError>),
    TypeaheadResults {
        field: String,
        query: String,
        result: Result<Vec<TypeaheadItem>, WorkflowError>,
    },
}

pub(super) struct TaskListView {
    pub(super) page_number: u32,
    pub(super) page: Option<TaskListPage>,
    pub(super) list_state: ListState,
    pub(super) loading: bool,
}

impl TaskListView {
    fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            page_number: 1,
            page: None,
            list_state,
            loading: true,
        }
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let index = self.list_state.selected()?;
        self.page.as_ref()?.results.get(index)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let Some(page) = &self.page else {
            return;
        };
        if page.results.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let last = (page.results.len() - 1) as isize;
        let next = (current + delta).clamp(0, last);
        self.list_state.select(Some(next as usize));
    }
}

pub(super) struct TaskScreen {
    pub(super) session: TaskSession,
    pub(super) editor: Option<FormEditor>,
}

impl TaskScreen {
    /// Build the editor for the freshly fetched task: derive the
    /// presentation, seed schema defaults into the form data, flatten.
    fn install_editor(&mut self) {
        let Some(task) = &self.session.task else {
            return;
        };
        let presentation = FormPresentation::derive(task, self.session.submitting);
        seed_defaults(&presentation.schema, &mut self.session.form_data);
        self.editor = Some(FormEditor::new(&presentation, &self.session.form_data));
    }
}

pub(super) struct InterstitialView {
    pub(super) process_model_id: String,
    pub(super) process_instance_id: i64,
}

pub(super) enum Screen {
    TaskList(TaskListView),
    TaskShow(TaskScreen),
    Interstitial(InterstitialView),
}

pub(super) struct App {
    pub(super) client: WorkflowClient,
    pub(super) screen: Screen,
    pub(super) banner: ErrorBanner,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) status_message: String,
    pub(super) per_page: u32,
    pub(super) show_logs: bool,
    pub(super) should_quit: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub(super) fn new(
        client: WorkflowClient,
        log_buffer: LogBufferHandle,
        per_page: u32,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            client,
            screen: Screen::TaskList(TaskListView::new()),
            banner: ErrorBanner::new(),
            log_buffer,
            status_message: "starting".to_string(),
            per_page,
            show_logs: false,
            should_quit: false,
            event_tx,
        }
    }

    /// The route the current screen corresponds to, for the breadcrumb.
    pub(super) fn current_destination(&self) -> Destination {
        match &self.screen {
            Screen::TaskList(_) => Destination::TaskList,
            Screen::TaskShow(show) => Destination::TaskDetail {
                process_instance_id: show.session.process_instance_id,
                task_id: show.session.task_id.clone(),
            },
            Screen::Interstitial(view) => Destination::Interstitial {
                process_model_id: view.process_model_id.clone(),
                process_instance_id: view.process_instance_id,
            },
        }
    }

    pub(super) fn navigate(&mut self, destination: Destination) {
        tracing::info!(path = %destination.route_path(), "navigate");
        self.banner.clear();
        match destination {
            Destination::TaskList => {
                self.screen = Screen::TaskList(TaskListView::new());
                self.status_message = "loading tasks".to_string();
                self.spawn_list_fetch(1);
            }
            Destination::TaskDetail {
                process_instance_id,
                task_id,
            } => {
                self.screen = Screen::TaskShow(TaskScreen {
                    session: TaskSession::new(process_instance_id, task_id.clone()),
                    editor: None,
                });
                self.status_message = "loading task".to_string();
                self.spawn_task_fetch(process_instance_id, task_id);
            }
            Destination::Interstitial {
                process_model_id,
                process_instance_id,
            } => {
                self.screen = Screen::Interstitial(InterstitialView {
                    process_model_id,
                    process_instance_id,
                });
                self.status_message = "waiting on other work".to_string();
            }
        }
    }

    /// Refetch whatever the current screen shows.
    pub(super) fn refresh(&mut self) {
        match &mut self.screen {
            Screen::TaskList(view) => {
                let page = view.page_number;
                view.loading = true;
                self.status_message = "loading tasks".to_string();
                self.spawn_list_fetch(page);
            }
            Screen::TaskShow(show) => {
                if show.session.submitting {
                    return;
                }
                show.editor = None;
                let process_instance_id = show.session.process_instance_id;
                let task_id = show.session.task_id.clone();
                self.status_message = "loading task".to_string();
                self.spawn_task_fetch(process_instance_id, task_id);
            }
            Screen::Interstitial(_) => {}
        }
    }

    /// Switch the task list to an adjacent page and refetch it.
    pub(super) fn change_list_page(&mut self, delta: i64) {
        let Screen::TaskList(view) = &mut self.screen else {
            return;
        };
        let pages = view
            .page
            .as_ref()
            .map_or(1, |page| page.pagination.pages.max(1));
        let next = (i64::from(view.page_number) + delta).clamp(1, i64::from(pages)) as u32;
        if next == view.page_number {
            return;
        }
        view.page_number = next;
        view.loading = true;
        self.status_message = "loading tasks".to_string();
        self.spawn_list_fetch(next);
    }

    pub(super) fn open_selected_task(&mut self) {
        let destination = match &self.screen {
            Screen::TaskList(view) => view.selected_task().map(|task| Destination::TaskDetail {
                process_instance_id: task.process_instance_id,
                task_id: task.id.clone(),
            }),
            _ => None,
        };
        if let Some(destination) = destination {
            self.navigate(destination);
        }
    }

    /// Plan and, when the plan says so, send the current form.
    ///
    /// The save-and-close switch counts as consumed by any planned attempt,
    /// whether it ends in navigation, rejection or a request.
    pub(super) fn submit_form(&mut self) {
        let today = chrono::Utc::now().date_naive();
        let planned = match &mut self.screen {
            Screen::TaskShow(show) => {
                if let Some(editor) = &show.editor {
                    editor.sync_into(&mut show.session.form_data);
                }
                let plan = plan_form_submit(&show.session, today);
                if plan.is_some() {
                    show.session.validation_disabled = false;
                }
                plan.map(|plan| {
                    (
                        plan,
                        show.session.process_instance_id,
                        show.session.task_id.clone(),
                    )
                })
            }
            _ => None,
        };
        let Some((plan, process_instance_id, task_id)) = planned else {
            return;
        };
        match plan {
            SubmitPlan::Navigate(destination) => self.navigate(destination),
            SubmitPlan::Reject(errors) => {
                self.status_message = "form has errors".to_string();
                if let Screen::TaskShow(show) = &mut self.screen
                    && let Some(editor) = &mut show.editor
                {
                    editor.errors = errors;
                }
            }
            SubmitPlan::Send {
                data,
                save_as_draft,
            } => {
                self.banner.clear();
                self.status_message = if save_as_draft {
                    "saving draft".to_string()
                } else {
                    "submitting".to_string()
                };
                if let Screen::TaskShow(show) = &mut self.screen {
                    show.session.submitting = true;
                    if let Some(editor) = &mut show.editor {
                        editor.errors = ValidationErrors::new();
                    }
                }
                let client = self.client.clone();
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .submit_task_data(process_instance_id, &task_id, &data, save_as_draft)
                        .await;
                    let _ = event_tx.send(AppEvent::SubmitFinished(result));
                });
            }
        }
    }

    /// Arm the draft switch, then run the ordinary submission path.
    pub(super) fn save_and_close(&mut self) {
        if let Screen::TaskShow(show) = &mut self.screen {
            if show.session.submitting {
                return;
            }
            show.session.validation_disabled = true;
        }
        self.submit_form();
    }

    /// Post the signal event behind one of the task's extra buttons.
    pub(super) fn send_signal(&mut self, index: usize) {
        let context = match &self.screen {
            Screen::TaskShow(show) => {
                if show.session.submitting {
                    None
                } else if let Some(task) = &show.session.task {
                    task.signal_buttons
                        .get(index)
                        .map(|button| (show.session.process_instance_id, button.event.clone()))
                } else {
                    None
                }
            }
            _ => None,
        };
        let Some((process_instance_id, event)) = context else {
            return;
        };
        self.banner.clear();
        self.status_message = "sending signal".to_string();
        if let Screen::TaskShow(show) = &mut self.screen {
            show.session.submitting = true;
        }
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.send_user_signal(process_instance_id, &event).await;
            let _ = event_tx.send(AppEvent::SubmitFinished(result));
        });
    }

    pub(super) fn begin_typeahead_search(&self, field: String, category: String, query: String) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client
                .typeahead_search(&category, &query, TYPEAHEAD_LIMIT)
                .await;
            let _ = event_tx.send(AppEvent::TypeaheadResults {
                field,
                query,
                result,
            });
        });
    }

    pub(super) fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::TasksListed(result) => self.on_tasks_listed(result),
            AppEvent::TaskFetched { result } => self.on_task_fetched(result),
            AppEvent::SubmitFinished(result) => self.on_submit_finished(result),
            AppEvent::TypeaheadResults {
                field,
                query,
                result,
            } => self.on_typeahead_results(field, query, result),
        }
    }

    fn on_tasks_listed(&mut self, result: Result<TaskListPage, WorkflowError>) {
        let status = {
            let Screen::TaskList(view) = &mut self.screen else {
                return;
            };
            view.loading = false;
            match result {
                Ok(page) => {
                    let selected = view.list_state.selected().unwrap_or(0);
                    let last = page.results.len().saturating_sub(1);
                    view.list_state.select(Some(selected.min(last)));
                    let status = format!("{} open tasks", page.pagination.total);
                    view.page = Some(page);
                    Ok(status)
                }
                Err(err) => Err(err),
            }
        };
        match status {
            Ok(status) => self.status_message = status,
            Err(err) => {
                tracing::warn!(error = %err, "task list fetch failed");
                self.banner.show(format!("load tasks failed: {err}"));
                self.status_message = "task list unavailable".to_string();
            }
        }
    }

    fn on_task_fetched(&mut self, result: Result<Task, WorkflowError>) {
        let outcome = match &mut self.screen {
            Screen::TaskShow(show) => match result {
                Ok(task) => {
                    let redirect = show.session.apply_fetched(task);
                    if redirect.is_none() {
                        show.install_editor();
                    }
                    Ok(redirect)
                }
                Err(err) => Err(err),
            },
            _ => return,
        };
        match outcome {
            Ok(Some(redirect)) => self.navigate(redirect),
            Ok(None) => self.status_message = "task loaded".to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "task fetch failed");
                self.banner.show(format!("load task failed: {err}"));
                self.status_message = "task unavailable".to_string();
            }
        }
    }

    fn on_submit_finished(&mut self, result: Result<SubmitReceipt, WorkflowError>) {
        let outcome = match &mut self.screen {
            Screen::TaskShow(show) => {
                show.session.submitting = false;
                match result {
                    Ok(receipt) => {
                        let current_model = show
                            .session
                            .task
                            .as_ref()
                            .map(|task| task.process_model_identifier.as_str())
                            .unwrap_or_default();
                        Ok(route_submit_receipt(&receipt, current_model))
                    }
                    Err(err) => Err(err),
                }
            }
            _ => return,
        };
        match outcome {
            Ok(SubmitDisposition::Navigate(destination)) => self.navigate(destination),
            Ok(SubmitDisposition::Error(body)) => {
                tracing::warn!(body = %body, "unrecognized submission response");
                self.banner
                    .show(format!("unexpected submit response: {body}"));
                self.status_message = "submit failed".to_string();
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.banner.show(format!("submit failed: {err}"));
                self.status_message = "submit failed".to_string();
            }
        }
    }

    fn on_typeahead_results(
        &mut self,
        field: String,
        query: String,
        result: Result<Vec<TypeaheadItem>, WorkflowError>,
    ) {
        let Screen::TaskShow(show) = &mut self.screen else {
            return;
        };
        let Some(editor) = &mut show.editor else {
            return;
        };
        match result {
            Ok(items) => {
                editor.apply_typeahead_results(&field, &query, items);
            }
            Err(err) => {
                tracing::debug!(error = %err, field, "typeahead search failed");
            }
        }
    }

    fn spawn_list_fetch(&self, page: u32) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        let per_page = self.per_page;
        tokio::spawn(async move {
            let result = client.list_open_tasks(page, per_page).await;
            let _ = event_tx.send(AppEvent::TasksListed(result));
        });
    }

    fn spawn_task_fetch(&self, process_instance_id: i64, task_id: String) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.get_task(process_instance_id, &task_id).await;
            let _ = event_tx.send(AppEvent::TaskFetched { result });
        });
    }
}

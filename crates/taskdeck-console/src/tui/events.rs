/*
[INPUT]:  Crossterm key events and the current screen
[OUTPUT]: App state mutations and spawned commands
[POS]:    TUI key routing
[UPDATE]: When a screen grows new key bindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{Destination, FormAction, FormPresentation};
use crate::tui::app::{App, Screen};
use crate::tui::editor::EditEffect;

/// Command a form-screen key resolved to, applied once the screen borrow
/// has ended.
enum FormCommand {
    None,
    Back,
    Refresh,
    Activate(FormAction),
    Search {
        field: String,
        category: String,
        query: String,
    },
}

pub(super) fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('l') => {
                app.show_logs = !app.show_logs;
                return;
            }
            _ => {}
        }
    }

    if matches!(app.screen, Screen::TaskList(_)) {
        handle_task_list_key(app, key);
    } else if matches!(app.screen, Screen::TaskShow(_)) {
        handle_task_show_key(app, key);
    } else {
        handle_interstitial_key(app, key);
    }
}

fn handle_task_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Enter => app.open_selected_task(),
        KeyCode::Up => {
            if let Screen::TaskList(view) = &mut app.screen {
                view.move_selection(-1);
            }
        }
        KeyCode::Down => {
            if let Screen::TaskList(view) = &mut app.screen {
                view.move_selection(1);
            }
        }
        KeyCode::Left => app.change_list_page(-1),
        KeyCode::Right => app.change_list_page(1),
        _ => {}
    }
}

fn handle_task_show_key(app: &mut App, key: KeyEvent) {
    let command = match &mut app.screen {
        Screen::TaskShow(show) => {
            // Keys are dead while a submission round trip is outstanding.
            if show.session.submitting {
                return;
            }
            match &mut show.editor {
                Some(editor) => match editor.handle_key(key) {
                    EditEffect::Handled => FormCommand::None,
                    EditEffect::Changed => {
                        editor.sync_into(&mut show.session.form_data);
                        FormCommand::None
                    }
                    EditEffect::SearchRequested {
                        field,
                        category,
                        query,
                    } => {
                        editor.sync_into(&mut show.session.form_data);
                        FormCommand::Search {
                            field,
                            category,
                            query,
                        }
                    }
                    EditEffect::ActionActivated(index) => show
                        .session
                        .task
                        .as_ref()
                        .map(|task| FormPresentation::derive(task, show.session.submitting))
                        .and_then(|presentation| presentation.actions.get(index).cloned())
                        .filter(|button| button.enabled)
                        .map_or(FormCommand::None, |button| {
                            FormCommand::Activate(button.action)
                        }),
                    EditEffect::Ignored => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => FormCommand::Back,
                        KeyCode::Char('r') => FormCommand::Refresh,
                        _ => FormCommand::None,
                    },
                },
                // Still loading, or the fetch failed: navigation only.
                None => match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => FormCommand::Back,
                    KeyCode::Char('r') => FormCommand::Refresh,
                    _ => FormCommand::None,
                },
            }
        }
        _ => return,
    };

    match command {
        FormCommand::None => {}
        FormCommand::Back => app.navigate(Destination::TaskList),
        FormCommand::Refresh => app.refresh(),
        FormCommand::Activate(action) => match action {
            FormAction::Submit => app.submit_form(),
            FormAction::SaveAndClose => app.save_and_close(),
            FormAction::Signal(index) => app.send_signal(index),
        },
        FormCommand::Search {
            field,
            category,
            query,
        } => app.begin_typeahead_search(field, category, query),
    }
}

fn handle_interstitial_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.navigate(Destination::TaskList);
        }
        _ => {}
    }
}

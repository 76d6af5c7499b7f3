/*
[INPUT]:  Task list view state and the current page of open tasks
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When list columns change
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::TaskListView;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    view: &mut TaskListView,
) {
    let title = match &view.page {
        Some(page) => format!(
            "Tasks (page {}/{}, {} open)",
            view.page_number,
            page.pagination.pages.max(1),
            page.pagination.total
        ),
        None => "Tasks".to_string(),
    };

    let items = match &view.page {
        None => vec![ListItem::new(if view.loading {
            "Loading..."
        } else {
            "No tasks found"
        })],
        Some(page) if page.results.is_empty() => vec![ListItem::new("No tasks found")],
        Some(page) => page
            .results
            .iter()
            .map(|task| {
                let model = task
                    .process_model_display_name
                    .as_deref()
                    .unwrap_or(task.process_model_identifier.as_str());
                let line = format!(
                    "#{} | {} | {} | {}",
                    task.process_instance_id,
                    task.name_for_display,
                    model,
                    task.state.wire_name()
                );
                ListItem::new(line)
            })
            .collect(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut view.list_state);
}

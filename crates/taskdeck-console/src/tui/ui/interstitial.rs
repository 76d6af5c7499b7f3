/*
[INPUT]:  Interstitial view state for a non-completable instance
[OUTPUT]: Waiting screen rendered into Ratatui frame
[POS]:    TUI UI interstitial rendering
[UPDATE]: When the waiting screen gains live progress
*/

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::normalize_process_model_id;
use crate::tui::app::InterstitialView;
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_interstitial(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    view: &InterstitialView,
) {
    let model = normalize_process_model_id(&view.process_model_id);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This process instance is waiting on other work.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Process model: {model}")),
        Line::from(format!("Instance:      #{}", view.process_instance_id)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc ", Style::default().fg(Color::Cyan)),
            Span::styled(
                "back to the task list",
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    let widget = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Waiting"),
        )
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

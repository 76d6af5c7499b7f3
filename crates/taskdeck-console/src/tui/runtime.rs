/*
[INPUT]:  Workflow client, starting route, log buffer, key events
[OUTPUT]: Ratatui run loop, frame layout, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use taskdeck_adapter::WorkflowClient;

use super::app::{App, Screen};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::{draw_interstitial, draw_logs, draw_task_form, draw_task_list};
use crate::controller::Destination;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
pub const LOG_BUFFER_CAPACITY: usize = 2000;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

/// Bounded in-memory sink for log lines, shown in the log pane.
#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// `MakeWriter` feeding the tracing subscriber into the log buffer, so
/// nothing is ever printed over the alternate screen.
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            let buffer = self.buffer.clone();
            let mut guard = buffer.lock().expect("log buffer lock");
            guard.push_line(line);
        }
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

enum UiEvent {
    Input(CrosstermEvent),
}

/// Run the console until the user quits.
///
/// Terminal input is polled on a blocking thread and funneled into the
/// select loop; API calls land on a second channel as [`AppEvent`]s. Both
/// are applied on this task, so screen state never needs a lock.
///
/// [`AppEvent`]: super::app::AppEvent
pub async fn run(
    client: WorkflowClient,
    initial: Destination,
    log_buffer: LogBufferHandle,
    per_page: u32,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    let _ = input_tx.send(UiEvent::Input(event));
                }
            }
        }
    });

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut app = App::new(client, log_buffer, per_page, event_tx);
    app.navigate(initial);

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);

    while !app.should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_input = input_rx.recv() => {
                if let Some(UiEvent::Input(CrosstermEvent::Key(key))) = maybe_input
                    && key.kind != KeyEventKind::Release
                {
                    handle_key_event(&mut app, key);
                }
            }
            maybe_event = event_rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_app_event(event);
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    draw_breadcrumb(frame, layout[0], app);
    draw_banner(frame, layout[1], app);

    if app.show_logs {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        draw_screen(frame, split[0], app);
        draw_logs(frame, split[1], &app.log_buffer);
    } else {
        draw_screen(frame, layout[2], app);
    }

    draw_footer(frame, layout[3], app);
}

fn draw_screen(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut App) {
    match &mut app.screen {
        Screen::TaskList(view) => draw_task_list(frame, area, view),
        Screen::TaskShow(show) => draw_task_form(frame, area, show),
        Screen::Interstitial(view) => draw_interstitial(frame, area, view),
    }
}

fn draw_breadcrumb(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(" taskdeck ", header_style()),
        Span::raw(" "),
        Span::raw(app.current_destination().route_path()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_banner(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let line = match app.banner.current() {
        Some(message) => Line::from(Span::styled(
            format!(" error: {message}"),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &App) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Tab]", key_style),
        Span::raw(" Next  "),
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Move  "),
        Span::styled("[Enter]", key_style),
        Span::raw(" Open/Activate  "),
        Span::styled("[Space]", key_style),
        Span::raw(" Toggle  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Cycle/Page"),
    ]);
    let line2 = Line::from(vec![
        Span::styled("[r]", key_style),
        Span::raw(" Refresh  "),
        Span::styled("[q/Esc]", key_style),
        Span::raw(" Back  "),
        Span::styled("[Ctrl+L]", key_style),
        Span::raw(" Logs  "),
        Span::styled("[Ctrl+C]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![line1, line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

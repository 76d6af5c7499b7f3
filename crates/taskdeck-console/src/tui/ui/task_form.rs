/*
[INPUT]:  Task screen state: session, form editor, derived presentation
[OUTPUT]: Task form rendered into Ratatui frame
[POS]:    TUI UI task form rendering
[UPDATE]: When field kinds gain new visual treatments
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::controller::FormPresentation;
use crate::tui::app::TaskScreen;
use crate::tui::editor::{FieldEditor, FieldKind, FocusTarget, FormEditor};
use crate::tui::runtime::border_style;

pub(in crate::tui) fn draw_task_form(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    show: &TaskScreen,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());

    // Nothing fetched yet, or the fetch failed: a bare frame. The banner
    // line above carries any error.
    let Some(task) = &show.session.task else {
        frame.render_widget(block.title("Task"), area);
        return;
    };

    let presentation = FormPresentation::derive(task, show.session.submitting);
    let block = block.title(format!(" {} ", presentation.heading));

    let mut content: Vec<Line> = vec![Line::from("")];
    if let Some(editor) = &show.editor {
        push_fields(&mut content, editor);
        push_actions(&mut content, editor, &presentation);
        content.push(Line::from(""));
        content.push(instruction_line(editor.read_only()));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_fields(content: &mut Vec<Line<'static>>, editor: &FormEditor) {
    let label_width = editor
        .fields()
        .iter()
        .map(|field| UnicodeWidthStr::width(label_text(field).as_str()))
        .max()
        .unwrap_or(0);

    for (index, field) in editor.fields().iter().enumerate() {
        let focused = editor.focus() == FocusTarget::Field(index);
        push_field(content, field, focused, label_width, editor.read_only());
        for message in editor.errors.at_path(&field.path) {
            content.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    "Error: ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(message.clone(), Style::default().fg(Color::Red)),
            ]));
        }
        content.push(Line::from(""));
    }
}

fn push_field(
    content: &mut Vec<Line<'static>>,
    field: &FieldEditor,
    focused: bool,
    label_width: usize,
    read_only: bool,
) {
    let label = label_text(field);
    let padding = label_width.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label_span = Span::styled(format!("{}{}: ", label, " ".repeat(padding)), label_style);
    let value_style = if read_only {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    let editing = focused && !read_only;

    match &field.kind {
        FieldKind::Text { input, .. } => {
            let mut spans = vec![label_span];
            spans.extend(value_spans(
                input.value(),
                editing.then_some(input.visual_cursor()),
                value_style,
            ));
            content.push(Line::from(spans));
        }
        FieldKind::Typeahead { input, lookup } => {
            let mut spans = vec![label_span];
            spans.extend(value_spans(
                input.value(),
                editing.then_some(input.visual_cursor()),
                value_style,
            ));
            content.push(Line::from(spans));
            if editing && lookup.has_suggestions() {
                let indent = " ".repeat(label_width + 4);
                for (index, suggestion) in lookup.suggestion_labels().iter().enumerate() {
                    let style = if lookup.selected_index() == Some(index) {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    content.push(Line::from(vec![
                        Span::raw(indent.clone()),
                        Span::styled(suggestion.clone(), style),
                    ]));
                }
            }
        }
        FieldKind::Bool { checked } => {
            let marker = if *checked { "[x]" } else { "[ ]" };
            content.push(Line::from(vec![
                label_span,
                Span::styled(marker.to_string(), value_style),
            ]));
        }
        FieldKind::Select {
            labels, selected, ..
        } => {
            let current = selected
                .and_then(|index| labels.get(index))
                .cloned()
                .unwrap_or_else(|| "-".to_string());
            let shown = if editing {
                format!("< {current} >")
            } else {
                current
            };
            content.push(Line::from(vec![
                label_span,
                Span::styled(shown, value_style),
            ]));
        }
        FieldKind::TextArea { area } => {
            let lines: Vec<String> = if area.lines().is_empty() {
                vec![String::new()]
            } else {
                area.lines().to_vec()
            };
            let (cursor_row, cursor_col) = area.cursor();
            let indent = " ".repeat(label_width + 2);
            for (row, line) in lines.iter().enumerate() {
                let cursor = (editing && row == cursor_row).then_some(cursor_col);
                let mut spans = if row == 0 {
                    vec![label_span.clone()]
                } else {
                    vec![Span::raw(indent.clone())]
                };
                spans.extend(value_spans(line, cursor, value_style));
                content.push(Line::from(spans));
            }
        }
    }
}

fn push_actions(
    content: &mut Vec<Line<'static>>,
    editor: &FormEditor,
    presentation: &FormPresentation,
) {
    if presentation.actions.is_empty() {
        // Read-only tasks keep an empty action row.
        content.push(Line::from(""));
        return;
    }
    let mut spans = Vec::new();
    for (index, button) in presentation.actions.iter().enumerate() {
        let mut style = Style::default();
        if !button.enabled {
            style = style.add_modifier(Modifier::DIM);
        }
        if editor.focus() == FocusTarget::Action(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[ {} ]", button.label), style));
        spans.push(Span::raw("  "));
    }
    content.push(Line::from(spans));
}

fn instruction_line(read_only: bool) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::Gray);
    if read_only {
        Line::from(vec![
            Span::styled("Esc/q ", key),
            Span::styled("back  ", text),
            Span::styled("r ", key),
            Span::styled("refresh", text),
        ])
    } else {
        Line::from(vec![
            Span::styled("Tab ", key),
            Span::styled("switch fields  ", text),
            Span::styled("Enter ", key),
            Span::styled("activate  ", text),
            Span::styled("Esc ", key),
            Span::styled("back", text),
        ])
    }
}

fn label_text(field: &FieldEditor) -> String {
    if field.required {
        format!("{}*", field.label)
    } else {
        field.label.clone()
    }
}

fn value_spans(value: &str, cursor: Option<usize>, style: Style) -> Vec<Span<'static>> {
    match cursor {
        Some(cursor) => {
            let before: String = value.chars().take(cursor).collect();
            let after: String = value.chars().skip(cursor).collect();
            vec![
                Span::styled(before, style),
                Span::styled("█", Style::default().fg(Color::Yellow)),
                Span::styled(after, style),
            ]
        }
        None => vec![Span::styled(value.to_string(), style)],
    }
}

//! Attachment list panel with per-row descriptions.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::{App, FormField};
use crate::tui::theme::current_theme;

/// Render the attachment table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();
    let focused = app.focus == FormField::Attachments;

    let title = format!(
        "{} ({})",
        i18n::tui_attachments_title(),
        app.composition.attachments.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused
        } else {
            theme.border
        })
        .title(title);

    if app.composition.attachments.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let hint = format!("{} \u{2014} Ctrl+A", i18n::tui_no_attachments());
        let empty = Paragraph::new(Line::from(Span::styled(hint, theme.help_dim)));
        frame.render_widget(empty, inner);
        return;
    }

    let rows: Vec<Row> = app
        .composition
        .attachments
        .iter()
        .enumerate()
        .map(|(i, att)| {
            let size = humansize::format_size(att.blob.size(), humansize::BINARY);
            let selected = focused && i == app.attachment_selected;
            let marker = if selected { ">" } else { " " };
            let style = if selected {
                theme.list_selected
            } else {
                theme.list_normal
            };
            let name_style = if selected {
                theme.list_selected
            } else {
                theme.attachment
            };

            let mut description = att.description.clone();
            if selected && app.editing_description {
                description.push('_');
            }

            Row::new(vec![
                Cell::from(marker).style(style),
                Cell::from(format!("{}", i + 1)).style(style),
                Cell::from(att.blob.name.clone()).style(name_style),
                Cell::from(att.blob.mime.clone()).style(style),
                Cell::from(size).style(style),
                Cell::from(description).style(style),
            ])
        })
        .collect();

    let header = Row::new(vec![
        Cell::from("").style(theme.list_header),
        Cell::from("#").style(theme.list_header),
        Cell::from(i18n::tui_col_filename()).style(theme.list_header),
        Cell::from(i18n::tui_col_type()).style(theme.list_header),
        Cell::from(i18n::tui_col_size()).style(theme.list_header),
        Cell::from(i18n::tui_col_description()).style(theme.list_header),
    ]);

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    frame.render_widget(table, area);
}

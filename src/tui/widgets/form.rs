//! Form fields: subject, recipients and the body editor.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n;
use crate::tui::app::{App, FormField};
use crate::tui::theme::current_theme;

/// Render the subject line field.
pub fn render_subject(frame: &mut Frame, app: &App, area: Rect) {
    render_line_field(
        frame,
        area,
        i18n::tui_subject_label(),
        &app.composition.subject,
        app.focus == FormField::Subject,
    );
}

/// Render the recipients field.
pub fn render_recipients(frame: &mut Frame, app: &App, area: Rect) {
    render_line_field(
        frame,
        area,
        i18n::tui_recipients_label(),
        &app.composition.recipients,
        app.focus == FormField::Recipients,
    );
}

/// Render the multi-line body editor.
pub fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();
    let focused = app.focus == FormField::Body;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused
        } else {
            theme.border
        })
        .title(i18n::tui_body_label());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = app
        .composition
        .body_html
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), theme.field_value)))
        .collect();

    // Cursor indicator on the last line while editing
    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("_", theme.input_prompt));
        }
    }

    // Keep the cursor in view: scroll past lines that no longer fit.
    let height = inner.height.max(1) as usize;
    let scroll = lines.len().saturating_sub(height) as u16;

    let paragraph = Paragraph::new(lines)
        .style(theme.field_value)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Render a single-line bordered input field.
fn render_line_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let theme = current_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.border_focused
        } else {
            theme.border
        })
        .title(label);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Show the tail when the value is wider than the field.
    let budget = inner.width.saturating_sub(1) as usize;
    let visible = tail_fitting(value, budget);

    let mut spans = vec![Span::styled(visible, theme.field_value)];
    if focused {
        spans.push(Span::styled("_", theme.input_prompt));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Longest suffix of `value` that fits in `budget` display columns.
fn tail_fitting(value: &str, budget: usize) -> String {
    if value.width() <= budget {
        return value.to_string();
    }

    let mut tail = String::new();
    let mut used = 0;
    for c in value.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        tail.insert(0, c);
    }
    tail
}

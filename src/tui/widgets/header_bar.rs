//! Top header bar showing the draft summary and target endpoint.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the top header bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let subject = if app.composition.subject.is_empty() {
        i18n::tui_no_subject().to_string()
    } else {
        app.composition.subject.clone()
    };

    let attachments = app.composition.attachments.len();

    let mut spans = vec![
        Span::styled(format!(" {}", i18n::app_name()), theme.header_bar),
        Span::styled(format!(" | {subject}"), theme.header_bar),
    ];

    if attachments > 0 {
        spans.push(Span::styled(
            format!(" | {}: {attachments}", i18n::tui_attachments_title()),
            theme.header_bar,
        ));
    }

    spans.push(Span::styled(
        format!(" | POST {}", app.endpoint),
        theme.header_bar,
    ));

    // Right-aligned help hint
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_text = " [F1] Help ";
    if area.width as usize > left_len + right_text.len() {
        let padding = area.width as usize - left_len - right_text.len();
        spans.push(Span::styled(" ".repeat(padding), theme.header_bar));
    }
    spans.push(Span::styled(right_text, theme.header_bar));

    let line = Line::from(spans);
    let bar = Paragraph::new(line).style(theme.header_bar);
    frame.render_widget(bar, area);
}

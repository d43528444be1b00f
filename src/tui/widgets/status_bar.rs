//! Bottom status bar showing submission status, transient notices, or
//! context-sensitive keyboard hints.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::{App, FormField};
use crate::tui::theme::current_theme;

/// Version string shown at the right edge of the status bar.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the status bar at the bottom with context-sensitive hints and version.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = current_theme();

    let version_text = format!("v{VERSION} ");
    let version_width = version_text.len() as u16;

    // Split: hints (flexible) | version (fixed)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(version_width)])
        .split(area);

    // Left side: status message, notice, or hints
    let content = if let Some((msg, is_notice)) = app.status_line() {
        let style = if is_notice {
            theme.status_notice
        } else {
            theme.status_bar
        };
        Line::from(Span::styled(format!(" {msg}"), style))
    } else {
        let hints = build_hints(app);
        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", theme.status_bar));
            }
            spans.push(Span::styled(format!(" {key}"), theme.input_prompt));
            spans.push(Span::styled(format!(":{desc}"), theme.status_bar));
        }
        Line::from(spans)
    };

    let bar = Paragraph::new(content).style(theme.status_bar);
    frame.render_widget(bar, chunks[0]);

    // Right side: version
    let version = Paragraph::new(Line::from(Span::styled(version_text, theme.border)))
        .alignment(Alignment::Right)
        .style(theme.status_bar);
    frame.render_widget(version, chunks[1]);
}

/// Return context-sensitive hint pairs (key, description) for the focused field.
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.editing_description {
        hints.push(("Enter", i18n::tui_hint_done()));
        hints.push(("Esc", i18n::tui_hint_cancel()));
        return hints;
    }

    if app.show_attach {
        hints.push(("Enter", i18n::tui_hint_confirm()));
        hints.push(("Esc", i18n::tui_hint_cancel()));
        return hints;
    }

    match app.focus {
        FormField::Subject | FormField::Recipients | FormField::Body => {
            hints.push(("Tab", i18n::tui_hint_field()));
            hints.push(("^S", i18n::tui_hint_send()));
            hints.push(("^A", i18n::tui_hint_attach()));
            hints.push(("^P", i18n::tui_hint_preview()));
            hints.push(("F1", i18n::tui_hint_help()));
            hints.push(("^C", i18n::tui_hint_quit()));
        }
        FormField::Attachments => {
            hints.push(("j/k", i18n::tui_hint_nav()));
            hints.push(("a", i18n::tui_hint_attach()));
            hints.push(("e", i18n::tui_hint_describe()));
            hints.push(("d", i18n::tui_hint_remove()));
            hints.push(("^S", i18n::tui_hint_send()));
            hints.push(("Tab", i18n::tui_hint_field()));
            hints.push(("^C", i18n::tui_hint_quit()));
        }
    }

    hints
}

//! Help popup showing keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A single shortcut entry.
struct Shortcut {
    key: &'static str,
    desc: &'static str,
}

/// Render the help popup centered on screen.
pub fn render(frame: &mut Frame, _app: &App) {
    let theme = current_theme();
    let screen = frame.area();

    let shortcuts = [
        Shortcut {
            key: "Tab / Shift+Tab",
            desc: i18n::tui_hint_field(),
        },
        Shortcut {
            key: "Ctrl+S",
            desc: i18n::tui_hint_send(),
        },
        Shortcut {
            key: "Ctrl+A",
            desc: i18n::tui_hint_attach(),
        },
        Shortcut {
            key: "Ctrl+P",
            desc: i18n::tui_hint_preview(),
        },
        Shortcut {
            key: "j/k",
            desc: i18n::tui_hint_nav(),
        },
        Shortcut {
            key: "e / Enter",
            desc: i18n::tui_hint_describe(),
        },
        Shortcut {
            key: "d / Del",
            desc: i18n::tui_hint_remove(),
        },
        Shortcut {
            key: "F1",
            desc: i18n::tui_hint_help(),
        },
        Shortcut {
            key: "Ctrl+C",
            desc: i18n::tui_hint_quit(),
        },
    ];

    let key_width = shortcuts.iter().map(|s| s.key.len()).max().unwrap_or(0);

    let mut lines: Vec<Line> = shortcuts
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(format!(" {:key_width$}  ", s.key), theme.input_prompt),
                Span::styled(s.desc, theme.popup),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {} v{VERSION}", i18n::app_name()),
        theme.help_dim,
    )));

    let popup_width = (screen.width * 50 / 100).clamp(30, screen.width.saturating_sub(4));
    let popup_height = (lines.len() as u16 + 2).min(screen.height.saturating_sub(2));
    let area = centered_rect_exact(popup_width, popup_height, screen);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .title(i18n::tui_help_title())
        .style(theme.popup);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Calculate a centered rectangle with an exact size.
fn centered_rect_exact(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

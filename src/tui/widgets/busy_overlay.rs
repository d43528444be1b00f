//! Full-screen busy indicator shown while a submission is in flight.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Spinner frames cycled on every render tick.
const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the sending overlay centered on screen.
pub fn render(frame: &mut Frame, app: &App) {
    let theme = current_theme();
    let area = centered_rect(40, 20, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.popup_title)
        .style(theme.popup);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spinner = FRAMES[app.busy_frame % FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!("{spinner} "), theme.input_prompt),
        Span::styled(i18n::msg_sending(), theme.popup_title),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);

    // Vertically center within the popup
    let mut text_area = inner;
    if inner.height > 1 {
        text_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
    }
    frame.render_widget(paragraph, text_area);
}

/// Calculate a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = (area.width * percent_x / 100).max(20);
    let height = (area.height * percent_y / 100).max(3);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

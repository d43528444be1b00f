//! Main render function that dispatches to widgets.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::app::App;
use super::widgets;

/// Render the entire TUI frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Vertical layout: header (1) + content (flex) + status (1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header bar
            Constraint::Min(8),    // content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    // Header bar
    widgets::header_bar::render(frame, app, vertical[0]);

    // Content: form on the left, live preview on the right
    let form_area = if app.show_preview {
        let h_split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);
        widgets::preview_pane::render(frame, app, h_split[1]);
        h_split[0]
    } else {
        vertical[1]
    };

    // Form: subject (3) + recipients (3) + body (flex) + attachments (flex)
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(form_area);

    widgets::form::render_subject(frame, app, form[0]);
    widgets::form::render_recipients(frame, app, form[1]);
    widgets::form::render_body(frame, app, form[2]);
    widgets::attachment_list::render(frame, app, form[3]);

    // Status bar
    widgets::status_bar::render(frame, app, vertical[2]);

    // Popups (rendered on top of everything)
    if app.show_help {
        widgets::help_popup::render(frame, app);
    }
    if app.show_attach {
        widgets::attach_popup::render(frame, app);
    }
    if app.composition.is_submitting() {
        widgets::busy_overlay::render(frame, app);
    }
}

//! Live preview pane mirroring the composed email.
//!
//! The projection is re-derived from the composition on every frame, so the
//! pane can never show stale content.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::i18n;
use crate::tui::app::App;
use crate::tui::theme::current_theme;

/// Render the preview pane.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = current_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(i18n::tui_preview_title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let preview = app.composition.preview();

    let mut lines: Vec<Line> = Vec::new();

    // Subject heading
    let subject = if preview.subject.is_empty() {
        i18n::tui_no_subject().to_string()
    } else {
        preview.subject.clone()
    };
    lines.push(Line::from(Span::styled(subject, theme.preview_heading)));
    lines.push(Line::from(""));

    // Converted body
    for l in preview.body_markup.split('\n') {
        lines.push(Line::from(Span::styled(
            l.to_string(),
            theme.preview_body,
        )));
    }

    // Attachments
    if !preview.attachments.is_empty() {
        lines.push(Line::from(""));
        for att in &preview.attachments {
            let mut spans = vec![Span::styled(att.name.clone(), theme.attachment)];
            if !att.description.is_empty() {
                spans.push(Span::styled(
                    format!(" \u{2014} {}", att.description),
                    theme.preview_body,
                ));
            }
            if att.is_image {
                spans.push(Span::styled(
                    format!(" {}", i18n::tui_image_tag()),
                    theme.image_tag,
                ));
            }
            lines.push(Line::from(spans));

            // Where an external viewer can open the image
            if let Some(path) = &att.preview_path {
                lines.push(Line::from(Span::styled(
                    format!("  {}", path.display()),
                    theme.help_dim,
                )));
            }
        }
    }

    // Recipients footer
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", i18n::tui_recipients_prefix()),
            theme.field_label,
        ),
        Span::styled(preview.recipients, theme.preview_body),
    ]));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

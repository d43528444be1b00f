//! Keyboard and input event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, FormField};

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    // ── Popup / input modes (capture all keys) ────────────
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) => app.show_help = false,
            _ => {}
        }
        return Ok(());
    }

    if app.show_attach {
        return handle_attach_input(app, key);
    }

    if app.editing_description {
        return handle_description_input(app, key);
    }

    // ── Always-available shortcuts ────────────────────────
    match (key.modifiers, key.code) {
        // Ctrl+C always quits, from any field
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return Ok(());
        }
        // Submit from any field; edits stay possible while in flight,
        // only a second submit is rejected.
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
            app.submit();
            return Ok(());
        }
        // Attach popup from any field
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            app.attach_input.clear();
            app.show_attach = true;
            return Ok(());
        }
        // Toggle the preview pane
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => {
            app.show_preview = !app.show_preview;
            return Ok(());
        }
        // Help from any field
        (_, KeyCode::F(1)) => {
            app.show_help = true;
            return Ok(());
        }
        // Scroll the preview pane
        (_, KeyCode::PageDown) => {
            if app.show_preview {
                app.preview_scroll = app.preview_scroll.saturating_add(5);
            }
            return Ok(());
        }
        (_, KeyCode::PageUp) => {
            if app.show_preview {
                app.preview_scroll = app.preview_scroll.saturating_sub(5);
            }
            return Ok(());
        }
        // Tab: cycle focus forward
        (_, KeyCode::Tab) => {
            app.focus = next_field(app.focus, true);
            return Ok(());
        }
        // Shift+Tab: cycle focus backward
        (_, KeyCode::BackTab) => {
            app.focus = next_field(app.focus, false);
            return Ok(());
        }
        _ => {}
    }

    // ── Field-specific handling ───────────────────────────
    match app.focus {
        FormField::Subject | FormField::Recipients => handle_line_field(app, key),
        FormField::Body => handle_body_keys(app, key),
        FormField::Attachments => handle_attachment_keys(app, key),
    }
    Ok(())
}

/// Cycle focus to the next (or previous) form field.
fn next_field(focus: FormField, forward: bool) -> FormField {
    if forward {
        match focus {
            FormField::Subject => FormField::Recipients,
            FormField::Recipients => FormField::Body,
            FormField::Body => FormField::Attachments,
            FormField::Attachments => FormField::Subject,
        }
    } else {
        match focus {
            FormField::Subject => FormField::Attachments,
            FormField::Recipients => FormField::Subject,
            FormField::Body => FormField::Recipients,
            FormField::Attachments => FormField::Body,
        }
    }
}

/// Editing for the single-line subject/recipients fields.
fn handle_line_field(app: &mut App, key: KeyEvent) {
    // Enter moves on, like filling in a paper form top to bottom
    if key.code == KeyCode::Enter {
        app.focus = next_field(app.focus, true);
        return;
    }

    let field = match app.focus {
        FormField::Subject => &mut app.composition.subject,
        FormField::Recipients => &mut app.composition.recipients,
        _ => return,
    };

    match key.code {
        KeyCode::Char(c) => field.push(c),
        KeyCode::Backspace => {
            field.pop();
        }
        _ => {}
    }
}

/// Editing for the multi-line body field.
///
/// The body is consumed verbatim as the HTML string the backend converter
/// expects; the TUI makes no attempt to interpret it.
fn handle_body_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.composition.body_html.push(c),
        KeyCode::Enter => app.composition.body_html.push('\n'),
        KeyCode::Backspace => {
            app.composition.body_html.pop();
        }
        _ => {}
    }
}

/// Key handling when the attachment list has focus.
fn handle_attachment_keys(app: &mut App, key: KeyEvent) {
    let len = app.composition.attachments.len();

    match key.code {
        // ── Navigation ───────────────────────────────────────
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 && app.attachment_selected + 1 < len {
                app.attachment_selected += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.attachment_selected = app.attachment_selected.saturating_sub(1);
        }

        // ── Actions ──────────────────────────────────────────
        KeyCode::Char('a') => {
            app.attach_input.clear();
            app.show_attach = true;
        }
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('e') | KeyCode::Enter => {
            if len > 0 {
                app.editing_description = true;
            }
        }
        _ => {}
    }
}

/// Key handling while the attach popup is open.
fn handle_attach_input(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.show_attach = false;
            app.attach_input.clear();
        }
        KeyCode::Enter => app.attach_from_input(),
        KeyCode::Backspace => {
            app.attach_input.pop();
        }
        KeyCode::Char(c) => app.attach_input.push(c),
        _ => {}
    }
    Ok(())
}

/// Key handling while a description is being edited in place.
fn handle_description_input(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.editing_description = false,
        KeyCode::Backspace => app.pop_description_char(),
        KeyCode::Char(c) => app.push_description_char(c),
        _ => {}
    }
    Ok(())
}

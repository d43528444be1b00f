//! Color theme definitions for the TUI.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// A complete color theme for the TUI.
pub struct Theme {
    pub header_bar: Style,
    pub status_bar: Style,
    pub status_notice: Style,
    pub field_label: Style,
    pub field_value: Style,
    pub list_selected: Style,
    pub list_header: Style,
    pub list_normal: Style,
    pub preview_heading: Style,
    pub preview_body: Style,
    pub attachment: Style,
    pub image_tag: Style,
    pub border: Style,
    pub border_focused: Style,
    pub popup: Style,
    pub popup_title: Style,
    pub input_prompt: Style,
    pub help_dim: Style,
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .bg(Color::Rgb(30, 30, 46)),
            status_bar: Style::default()
                .fg(Color::Rgb(150, 150, 170))
                .bg(Color::Rgb(30, 30, 46)),
            status_notice: Style::default()
                .fg(Color::Yellow)
                .bg(Color::Rgb(30, 30, 46)),
            field_label: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            field_value: Style::default().fg(Color::Rgb(220, 220, 230)),
            list_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 100)),
            list_header: Style::default()
                .fg(Color::Rgb(180, 180, 200))
                .bg(Color::Rgb(40, 40, 60))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(200, 200, 220)),
            preview_heading: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            preview_body: Style::default().fg(Color::Rgb(220, 220, 230)),
            attachment: Style::default().fg(Color::Green),
            image_tag: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::Rgb(80, 80, 100)),
            border_focused: Style::default().fg(Color::Cyan),
            popup: Style::default()
                .fg(Color::Rgb(220, 220, 230))
                .bg(Color::Rgb(20, 20, 35)),
            popup_title: Style::default()
                .fg(Color::Rgb(130, 170, 255))
                .add_modifier(Modifier::BOLD),
            input_prompt: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            help_dim: Style::default().fg(Color::Rgb(120, 120, 140)),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            header_bar: Style::default()
                .fg(Color::Rgb(40, 40, 60))
                .bg(Color::Rgb(220, 220, 235)),
            status_bar: Style::default()
                .fg(Color::Rgb(80, 80, 100))
                .bg(Color::Rgb(220, 220, 235)),
            status_notice: Style::default()
                .fg(Color::Rgb(150, 90, 0))
                .bg(Color::Rgb(220, 220, 235)),
            field_label: Style::default()
                .fg(Color::Rgb(30, 80, 180))
                .add_modifier(Modifier::BOLD),
            field_value: Style::default().fg(Color::Rgb(30, 30, 40)),
            list_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(180, 190, 230)),
            list_header: Style::default()
                .fg(Color::Rgb(50, 50, 70))
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            list_normal: Style::default().fg(Color::Rgb(40, 40, 60)),
            preview_heading: Style::default()
                .fg(Color::Rgb(30, 80, 180))
                .add_modifier(Modifier::BOLD),
            preview_body: Style::default().fg(Color::Rgb(30, 30, 40)),
            attachment: Style::default().fg(Color::Rgb(0, 110, 50)),
            image_tag: Style::default().fg(Color::Rgb(0, 110, 130)),
            border: Style::default().fg(Color::Rgb(160, 160, 180)),
            border_focused: Style::default().fg(Color::Rgb(30, 80, 180)),
            popup: Style::default()
                .fg(Color::Rgb(30, 30, 40))
                .bg(Color::Rgb(235, 235, 245)),
            popup_title: Style::default()
                .fg(Color::Rgb(30, 80, 180))
                .add_modifier(Modifier::BOLD),
            input_prompt: Style::default()
                .fg(Color::Rgb(150, 90, 0))
                .add_modifier(Modifier::BOLD),
            help_dim: Style::default().fg(Color::Rgb(130, 130, 150)),
        }
    }

    /// Look up a theme by config name (unknown names fall back to dark).
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

static THEME_NAME: OnceLock<String> = OnceLock::new();

/// Set the active theme name. Call once at startup; later calls are no-ops.
pub fn set_theme(name: &str) {
    let _ = THEME_NAME.set(name.to_string());
}

/// Return the active theme.
pub fn current_theme() -> Theme {
    Theme::by_name(THEME_NAME.get().map(String::as_str).unwrap_or("dark"))
}

use crate::submission::view::AlertLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 41);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 54);

    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 90);

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 178);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 111, 125);

    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_ROSE: Color = Color::Rgb(230, 100, 120);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 140, 220);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn body_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn section_heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG_ELEVATED)
    }

    pub fn step_done() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Self::BG_ELEVATED)
    }

    pub fn step_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn step_pending() -> Style {
        Style::default().fg(Self::TEXT_MUTED).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn alert(level: AlertLevel) -> Style {
        let fg = match level {
            AlertLevel::Info => Self::ACCENT_AMBER,
            AlertLevel::Success => Self::ACCENT_GREEN,
            AlertLevel::Error => Self::ACCENT_ROSE,
        };
        Style::default().fg(fg).bg(Self::BG_ELEVATED)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Self::ACCENT_ROSE)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}

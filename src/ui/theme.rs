use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(24, 24, 37);
    pub const BG_SURFACE: Color = Color::Rgb(36, 39, 58);
    pub const TEXT_PRIMARY: Color = Color::Rgb(205, 214, 244);
    pub const TEXT_SECONDARY: Color = Color::Rgb(166, 173, 200);
    pub const TEXT_MUTED: Color = Color::Rgb(108, 112, 134);
    pub const BORDER_DIM: Color = Color::Rgb(69, 71, 90);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(180, 190, 254);
    pub const ACCENT_AMBER: Color = Color::Rgb(249, 226, 175);
    pub const ACCENT_TEAL: Color = Color::Rgb(148, 226, 213);
    pub const ACCENT_ROSE: Color = Color::Rgb(243, 139, 168);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cell() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn app_name() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Self::BG_SURFACE).add_modifier(Modifier::BOLD)
    }

    pub fn star_filled() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn star_empty() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Self::ACCENT_ROSE).bg(Self::BORDER_DIM)
    }

    pub fn menu_selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }
}

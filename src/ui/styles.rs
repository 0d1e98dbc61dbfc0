use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::ui::adapter::Theme;
use crate::ui::notify::Severity;

/// Accent color used for focus, highlights, and status badges.
pub const ACCENT: Color = Color::Indexed(208);

/// Colors a chart surface paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub axis: Color,
    pub up: Color,
    pub down: Color,
    pub line: Color,
    pub slices: [Color; 3],
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Reset,
            foreground: Color::Gray,
            axis: Color::DarkGray,
            up: Color::Green,
            down: Color::Red,
            line: Color::Cyan,
            slices: [Color::Green, Color::Yellow, Color::Red],
        },
        Theme::Light => Palette {
            background: Color::White,
            foreground: Color::Black,
            axis: Color::Gray,
            up: Color::Rgb(0, 128, 96),
            down: Color::Rgb(200, 40, 40),
            line: Color::Blue,
            slices: [Color::Rgb(0, 128, 96), Color::Rgb(190, 140, 0), Color::Rgb(200, 40, 40)],
        },
    }
}

/// Block style for a chart of the given palette.
pub fn surface_style(palette: &Palette) -> Style {
    Style::default().bg(palette.background).fg(palette.foreground)
}

/// Apply the accent and bold modifiers for the focused selector.
pub fn selection_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Success => Style::default().fg(Color::Black).bg(Color::Green),
        Severity::Error => Style::default().fg(Color::White).bg(Color::Red),
    }
}

/// Dimmed text chunk for inline hints.
pub fn secondary_span<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    let owned = text.into().into_owned();
    Span::from(owned).dim()
}

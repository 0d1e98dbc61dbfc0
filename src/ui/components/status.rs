use ratatui::{prelude::*, widgets::Paragraph};

use crate::ui::notify::StatusBar;
use crate::ui::styles::{secondary_span, severity_style, ACCENT};

/// One-line footer: snackbar if one is showing, otherwise the spinner, then key hints.
pub fn render_status(f: &mut Frame<'_>, area: Rect, status: &StatusBar, hint: &str) {
    let mut spans = Vec::new();

    if let Some(snackbar) = status.snackbar() {
        spans.push(Span::styled(
            format!(" {} ", snackbar.message),
            severity_style(snackbar.severity),
        ));
        spans.push(Span::from(" "));
    } else if let Some(message) = status.busy_message() {
        spans.push(Span::styled(
            format!("{} {} ", status.spinner(), message),
            Style::default().fg(ACCENT),
        ));
    }

    spans.push(secondary_span(hint.to_string()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

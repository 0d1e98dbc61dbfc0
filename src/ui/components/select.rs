use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::state::Selector;
use crate::ui::styles::{secondary_span, selection_style};
use crate::utils::truncate_to_width;

/// Render a dropdown as a single `◀ value ▶` row with its position, e.g. `2/5`.
pub fn render_selector<T>(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    selector: &Selector<T>,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(if focused {
            selection_style()
        } else {
            Style::default()
        });

    let position = match selector.position() {
        Some(index) => format!(" {}/{}", index + 1, selector.len()),
        None => String::new(),
    };
    let chrome = UnicodeWidthStr::width("◀  ▶") + UnicodeWidthStr::width(position.as_str());
    let room = usize::from(area.width.saturating_sub(2)).saturating_sub(chrome);

    let text = selector
        .selected()
        .map(|option| truncate_to_width(&option.text, room))
        .unwrap_or_else(|| "—".to_string());
    let value = if focused {
        Span::styled(text, selection_style())
    } else {
        Span::from(text)
    };

    let line = Line::from(vec![
        Span::from("◀ "),
        value,
        Span::from(" ▶"),
        secondary_span(position),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    split(area, Direction::Vertical, constraints)
}

pub fn split_horizontal(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    split(area, Direction::Horizontal, constraints)
}

fn split(area: Rect, direction: Direction, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(direction)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}

/// `area` shrunk by one cell on every side, or `None` when nothing is left.
pub fn inner_area(area: Rect) -> Option<Rect> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    Some(Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2))
}

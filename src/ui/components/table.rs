use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use crate::fetch::{CompanyProfile, Symbol};
use crate::utils::{format_market_cap, truncate_to_width};

pub fn build_table<'a>(
    rows: Vec<Row<'a>>,
    header: Row<'a>,
    widths: Vec<Constraint>,
    title: impl Into<String>,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title.into()))
        .column_spacing(2)
}

/// Field/value pairs shown in the profile table: ticker and capitalization first, then the
/// company profile when it has arrived, otherwise whatever metadata came with the top pick.
pub fn profile_fields(symbol: &Symbol, profile: Option<&CompanyProfile>) -> Vec<(String, String)> {
    let mut fields = vec![
        ("Symbol".to_string(), symbol.ticker.clone()),
        (
            "Market cap".to_string(),
            symbol
                .market_capitalization
                .map(format_market_cap)
                .unwrap_or_else(|| "n/a".to_string()),
        ),
    ];
    match profile {
        Some(profile) => fields.extend(profile.fields.iter().cloned()),
        None => fields.extend(
            symbol
                .details
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        ),
    }
    fields
}

pub fn render_profile(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    symbol: Option<&Symbol>,
    profile: Option<&CompanyProfile>,
) {
    let fields = symbol
        .map(|symbol| profile_fields(symbol, profile))
        .unwrap_or_default();

    let key_width = fields
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(5)
        .min(18);
    let value_room = usize::from(area.width.saturating_sub(2))
        .saturating_sub(key_width + 2);

    let rows = fields
        .into_iter()
        .map(|(key, value)| {
            Row::new(vec![
                truncate_to_width(&key, key_width),
                truncate_to_width(&value, value_room),
            ])
        })
        .collect();

    let table = build_table(
        rows,
        Row::new(vec!["Field", "Value"]).bold(),
        vec![Constraint::Length(key_width as u16), Constraint::Min(4)],
        title,
    );
    f.render_widget(table, area);
}

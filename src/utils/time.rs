use chrono::{DateTime, Utc};

/// Date label for chart axes: full date at the ends, shorter in between.
pub fn format_axis_date(timestamp: DateTime<Utc>, long_span: bool, edge: bool) -> String {
    let format = if edge {
        "%Y-%m-%d"
    } else if long_span {
        "%Y-%m"
    } else {
        "%m-%d"
    };
    timestamp.format(format).to_string()
}

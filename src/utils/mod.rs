pub mod text;
pub mod time;

pub use text::{format_market_cap, truncate_to_width};
pub use time::format_axis_date;

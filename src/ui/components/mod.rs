pub mod chart;
pub mod select;
pub mod status;
pub mod table;
pub mod terminal;
pub mod utils;

pub use chart::render_surface;
pub use select::render_selector;
pub use status::render_status;
pub use table::render_profile;
pub use terminal::TerminalGuard;

pub mod adapter;
pub mod components;
pub mod composer;
pub mod engine;
pub mod layout;
pub mod notify;
pub mod observer;
pub mod screens;
pub mod styles;

pub use adapter::{ChartEngine, ChartHandle, ContainerId, RenderingAdapter};
pub use composer::ViewComposer;
pub use engine::TerminalEngine;
pub use notify::{Notifier, StatusBar};
pub use screens::run_dashboard;

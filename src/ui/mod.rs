mod chart;
mod dashboard;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use dashboard::render_dashboard;

pub(crate) use screens::{render_error, render_loading};

pub(crate) use styles::MarketColor;

pub use ui_config::{UI_CONFIG, UI_TEXT};

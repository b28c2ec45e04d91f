//! Window shell for the plan switcher

mod app;
pub mod constants;

pub use app::run_gui;

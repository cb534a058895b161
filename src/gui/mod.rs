mod about;
pub mod actions;
pub mod app;
mod charts;
mod dashboard;
mod detail;
mod message_overlay;
pub mod settings;
mod sidebar;
mod summary;
pub mod table;
pub mod theme;
mod top_bar;

pub use app::DashApp;

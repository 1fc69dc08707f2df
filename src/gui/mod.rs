//! GUI module - User interface components

mod app;
mod pages;
mod sidebar;

pub use app::SentimentApp;
pub use pages::Pages;
pub use sidebar::{Sidebar, SidebarAction};

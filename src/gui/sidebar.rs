//! Sidebar Menu
//! Left navy panel with the four page entries.

use crate::charts::NAVY;
use crate::view::Page;
use egui::{Color32, RichText};

const GOLD: Color32 = Color32::from_rgb(250, 204, 21);

/// Actions triggered by the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    Navigate(Page),
}

/// Page menu. Stateless: the current page lives in the app's `ViewState`.
pub struct Sidebar;

impl Sidebar {
    pub fn frame() -> egui::Frame {
        egui::Frame::none().fill(NAVY).inner_margin(egui::Margin::symmetric(30.0, 40.0))
    }

    /// Draw the menu and report a page switch, if any.
    pub fn show(ui: &mut egui::Ui, current: Page) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.label(
            RichText::new("Menu")
                .size(34.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.add_space(35.0);

        for page in Page::ALL {
            let selected = page == current;
            let marker = if selected { "●" } else { "○" };
            let text = RichText::new(format!("{}  {}", marker, page.label()))
                .size(18.0)
                .color(if selected { GOLD } else { Color32::WHITE });

            if ui.selectable_label(selected, text).clicked() && !selected {
                action = SidebarAction::Navigate(page);
            }
            ui.add_space(18.0);
        }

        ui.add_space(12.0);
        ui.separator();

        action
    }
}

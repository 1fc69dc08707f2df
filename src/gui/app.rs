//! Sentiment Dashboard Main Application
//! Main window with the page menu and the selected page.

use crate::config::DashboardConfig;
use crate::data::Dataset;
use crate::gui::{Pages, Sidebar, SidebarAction};
use crate::view::{self, Page, ViewState};
use egui::SidePanel;
use std::sync::Arc;
use tracing::debug;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xF8, 0xFA, 0xFC);

/// Main application window.
///
/// Holds the shared, never-mutated dataset and the per-frame UI state.
/// Every frame re-renders the current page from scratch.
pub struct SentimentApp {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    state: ViewState,
}

impl SentimentApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        dataset: Arc<Dataset>,
        config: DashboardConfig,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self {
            dataset,
            config,
            state: ViewState::default(),
        }
    }

    fn handle_navigate(&mut self, page: Page) {
        debug!(from = ?self.state.page, to = ?page, "page switch");
        self.state.page = page;
    }
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Menu
        SidePanel::left("menu")
            .resizable(false)
            .exact_width(240.0)
            .frame(Sidebar::frame())
            .show(ctx, |ui| match Sidebar::show(ui, self.state.page) {
                SidebarAction::Navigate(page) => self.handle_navigate(page),
                SidebarAction::None => {}
            });

        // Central panel - current page
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("page_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        if self.state.page == Page::Dashboard {
                            Pages::dashboard_title(ui);
                            if Pages::filter_bar(ui, &mut self.state.filter) {
                                debug!(filter = ?self.state.filter, "dashboard filter changed");
                            }
                        }

                        let page_view =
                            view::render(&self.dataset, &self.state, self.config.histogram_bins);
                        Pages::show(ui, &page_view, &self.config);
                    });
            });
    }
}

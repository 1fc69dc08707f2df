//! Page Widgets
//! Draws Home, Dashboard, Data and About from their view models.

use crate::charts::{ChartPlotter, NAVY};
use crate::config::DashboardConfig;
use crate::data::{DashboardFilter, PlatformFilter, SentimentFilter};
use crate::view::{DashboardView, DataView, HomeView, PageView};
use egui::{Color32, ComboBox, RichText, ScrollArea};

const PIE_HEIGHT: f32 = 320.0;
const HISTOGRAM_HEIGHT: f32 = 320.0;
const ROW_HEIGHT: f32 = 22.0;
/// Column width shares for Aplikasi / Review / Sentimen / Cleaned Text
const COLUMN_SHARES: [f32; 4] = [0.12, 0.44, 0.10, 0.34];

pub const NO_DATA_TEXT: &str = "Tidak ada data untuk ditampilkan.";

/// Page drawing helpers.
pub struct Pages;

impl Pages {
    /// Draw whichever page `view` describes.
    pub fn show(ui: &mut egui::Ui, view: &PageView<'_>, config: &DashboardConfig) {
        match view {
            PageView::Home(home) => Self::show_home(ui, home),
            PageView::Dashboard(dashboard) => Self::show_dashboard(ui, dashboard),
            PageView::Data(data) => Self::show_data(ui, data, config.table_height),
            PageView::About => Self::show_about(ui),
        }
    }

    fn title(ui: &mut egui::Ui, text: &str) {
        egui::Frame::none()
            .fill(NAVY)
            .rounding(10.0)
            .inner_margin(20.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(text).size(30.0).strong().color(Color32::WHITE));
                });
            });
        ui.add_space(20.0);
    }

    fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .rounding(10.0)
            .inner_margin(20.0)
            .shadow(egui::epaint::Shadow {
                offset: egui::vec2(0.0, 4.0),
                blur: 8.0,
                spread: 0.0,
                color: Color32::from_black_alpha(25),
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
        ui.add_space(20.0);
    }

    fn metric(ui: &mut egui::Ui, label: &str, value: usize) {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).size(14.0).color(Color32::GRAY));
            ui.label(RichText::new(value.to_string()).size(32.0).strong());
        });
    }

    fn heading(ui: &mut egui::Ui, text: &str) {
        ui.add_space(10.0);
        ui.label(RichText::new(text).size(20.0).strong());
        ui.add_space(6.0);
    }

    fn show_home(ui: &mut egui::Ui, home: &HomeView) {
        Self::title(ui, "Analisis Sentimen BCA Mobile & BRImo");

        Self::card(ui, |ui| {
            ui.label(RichText::new("📱 Deskripsi Aplikasi").size(18.0).strong());
            ui.label(
                "Website ini menyajikan hasil analisis sentimen pengguna terhadap aplikasi \
                 BCA Mobile dan BRImo. Visualisasi mencakup distribusi sentimen, perbandingan \
                 performa aplikasi, dan insight penting lainnya.",
            );
        });

        ui.columns(3, |cols| {
            Self::metric(&mut cols[0], "Total Review", home.total);
            Self::metric(&mut cols[1], "BCA Mobile", home.bca_mobile);
            Self::metric(&mut cols[2], "BRImo", home.brimo);
        });

        Self::heading(ui, "Perbandingan Sentimen BCA Mobile vs BRImo");
        if home.total > 0 {
            ChartPlotter::draw_pie_chart(ui, &home.platform_distribution, PIE_HEIGHT);
        } else {
            ui.label(NO_DATA_TEXT);
        }
        ui.add_space(20.0);

        Self::card(ui, |ui| {
            ui.label(RichText::new("🎯 Tujuan Penelitian").size(18.0).strong());
            for goal in [
                "Menganalisis persepsi pengguna mobile banking",
                "Membandingkan sentimen BCA Mobile & BRImo",
                "Menyediakan insight berbasis data",
                "Dashboard interaktif untuk laporan",
            ] {
                ui.label(format!("•  {goal}"));
            }
        });
    }

    pub fn dashboard_title(ui: &mut egui::Ui) {
        Self::title(ui, "Sentiment Dashboard");
    }

    /// Both dashboard dropdowns. Returns true when a selection changed.
    pub fn filter_bar(ui: &mut egui::Ui, filter: &mut DashboardFilter) -> bool {
        let before = *filter;

        ui.columns(2, |cols| {
            cols[0].label("Pilih Aplikasi");
            ComboBox::from_id_salt("platform_filter")
                .width(220.0)
                .selected_text(filter.platform.label())
                .show_ui(&mut cols[0], |ui| {
                    for option in PlatformFilter::OPTIONS {
                        ui.selectable_value(&mut filter.platform, option, option.label());
                    }
                });

            cols[1].label("Pilih Sentimen");
            ComboBox::from_id_salt("sentiment_filter")
                .width(220.0)
                .selected_text(filter.sentiment.label())
                .show_ui(&mut cols[1], |ui| {
                    for option in SentimentFilter::OPTIONS {
                        ui.selectable_value(&mut filter.sentiment, option, option.label());
                    }
                });
        });

        *filter != before
    }

    fn show_dashboard(ui: &mut egui::Ui, dashboard: &DashboardView) {
        Self::heading(ui, "📊 Sentiment Summary");
        ui.columns(2, |cols| {
            Self::metric(&mut cols[0], "Positive", dashboard.counts.positive);
            Self::metric(&mut cols[1], "Negative", dashboard.counts.negative);
        });

        Self::heading(ui, "🥧 Sentiment Distribution");
        match &dashboard.sentiment_distribution {
            Some(distribution) => ChartPlotter::draw_pie_chart(ui, distribution, PIE_HEIGHT),
            None => {
                egui::Frame::none()
                    .fill(Color32::from_rgb(219, 234, 254))
                    .rounding(6.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(NO_DATA_TEXT).color(NAVY));
                    });
            }
        }

        Self::heading(ui, "✏ Comment Length Distribution");
        if let Some(histogram) = &dashboard.length_histogram {
            ChartPlotter::draw_length_histogram(ui, histogram, HISTOGRAM_HEIGHT);
            ui.label(
                RichText::new(format!(
                    "{} reviews, bin width {:.1} characters",
                    histogram.total(),
                    histogram.bin_width
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
            ui.add_space(10.0);
            ChartPlotter::draw_length_stats_table(ui, &dashboard.length_stats);
        }
    }

    fn show_data(ui: &mut egui::Ui, data: &DataView<'_>, table_height: f32) {
        Self::title(ui, "Sentiment Data");
        Self::heading(ui, "📄 View Data");

        let width = ui.available_width();
        let widths = COLUMN_SHARES.map(|share| width * share - 8.0);

        ui.horizontal(|ui| {
            for (header, w) in DataView::HEADERS.iter().zip(widths) {
                ui.add_sized([w, ROW_HEIGHT], egui::Label::new(RichText::new(*header).strong()));
            }
        });
        ui.separator();

        ScrollArea::both()
            .max_height(table_height)
            .auto_shrink([false, true])
            .show_rows(ui, ROW_HEIGHT, data.rows.len(), |ui, row_range| {
                for idx in row_range {
                    let Some(cells) = data.cells(idx) else {
                        continue;
                    };
                    ui.horizontal(|ui| {
                        for (cell, w) in cells.iter().zip(widths) {
                            ui.add_sized([w, ROW_HEIGHT], egui::Label::new(*cell).truncate());
                        }
                    });
                }
            });

        ui.add_space(6.0);
        ui.label(
            RichText::new(format!("{} rows", data.rows.len()))
                .size(11.0)
                .color(Color32::GRAY),
        );
    }

    fn show_about(ui: &mut egui::Ui) {
        Self::title(ui, "Tentang Aplikasi");

        Self::card(ui, |ui| {
            ui.label(RichText::new("📘 Deskripsi Aplikasi").size(18.0).strong());
            ui.label(
                "Aplikasi ini dirancang untuk menganalisis sentimen publik terhadap layanan \
                 mobile banking BCA Mobile dan BRImo, berdasarkan ulasan pengguna dan \
                 ditampilkan dalam bentuk visualisasi grafik yang mudah dipahami.",
            );
            ui.add_space(12.0);

            ui.label(RichText::new("✨ Fitur Utama").size(18.0).strong());
            for feature in [
                "Analisis komentar positif & negatif",
                "Perbandingan sentimen antar aplikasi",
                "Visualisasi grafik interaktif",
                "Tampilan data komentar yang telah diproses",
            ] {
                ui.label(format!("•  {feature}"));
            }
            ui.add_space(12.0);

            ui.label(RichText::new("👩‍💻 Pengembang").size(18.0).strong());
            ui.label(
                "Aplikasi ini dikembangkan sebagai bagian dari Tugas Akhir di Universitas \
                 Tarumanagara, untuk memberikan pemahaman yang lebih mendalam mengenai opini \
                 pengguna terhadap layanan mobile banking melalui analisis sentimen yang \
                 terstruktur dan mudah dipahami.",
            );
        });
    }
}

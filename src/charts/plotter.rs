//! Chart Plotter Module
//! Pie charts drawn with the egui painter, histograms with egui_plot.

use crate::data::Sentiment;
use crate::stats::{CategoryCount, LengthHistogram, LengthStats};
use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, Legend, Plot};
use std::f32::consts::{FRAC_PI_2, TAU};

pub const NAVY: Color32 = Color32::from_rgb(0x1E, 0x3A, 0x8A);
pub const SKY: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Colors for categories outside the fixed map
const PALETTE: [Color32; 4] = [
    Color32::from_rgb(250, 204, 21),  // Gold
    Color32::from_rgb(16, 185, 129),  // Emerald
    Color32::from_rgb(239, 68, 68),   // Red
    Color32::from_rgb(148, 163, 184), // Slate
];

/// Largest arc a single convex wedge may span.
const MAX_WEDGE: f32 = FRAC_PI_2;
/// Slices smaller than this get no percentage label.
const MIN_LABEL_FRACTION: f32 = 0.04;

/// One wedge of a pie chart. Angles are radians, clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub fraction: f32,
    pub start: f32,
    pub end: f32,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f32 {
        (self.start + self.end) / 2.0
    }
}

/// Creates the dashboard visualizations.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Fixed color map: BCA Mobile / positive in navy, BRImo / negative in sky blue.
    pub fn category_color(label: &str, index: usize) -> Color32 {
        match label {
            "BCA Mobile" | "positive" => NAVY,
            "BRImo" | "negative" => SKY,
            _ => PALETTE[index % PALETTE.len()],
        }
    }

    pub fn sentiment_color(sentiment: Sentiment) -> Color32 {
        Self::category_color(sentiment.as_str(), 0)
    }

    /// Lay out pie wedges proportionally to the counts.
    pub fn pie_slices(counts: &[CategoryCount]) -> Vec<PieSlice> {
        let total: usize = counts.iter().map(|c| c.count).sum();
        if total == 0 {
            return Vec::new();
        }

        let mut angle = 0.0_f32;
        counts
            .iter()
            .map(|c| {
                let fraction = c.count as f32 / total as f32;
                let start = angle;
                angle += fraction * TAU;
                PieSlice {
                    label: c.label.clone(),
                    count: c.count,
                    fraction,
                    start,
                    end: angle,
                }
            })
            .collect()
    }

    fn point_at(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        // angle 0 points up, growing clockwise
        Pos2::new(
            center.x + radius * angle.sin(),
            center.y - radius * angle.cos(),
        )
    }

    /// Draw a pie chart with a legend on the right.
    pub fn draw_pie_chart(ui: &mut egui::Ui, counts: &[CategoryCount], height: f32) {
        let slices = Self::pie_slices(counts);
        let width = ui.available_width();

        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), Sense::hover());
        let rect = response.rect;
        let radius = (height / 2.0 - 10.0).max(10.0);
        let center = Pos2::new(rect.left() + width * 0.4, rect.center().y);

        for (i, slice) in slices.iter().enumerate() {
            let color = Self::category_color(&slice.label, i);

            // Split into wedges of at most 90 degrees so each is convex
            let span = slice.end - slice.start;
            let wedges = (span / MAX_WEDGE).ceil().max(1.0) as usize;
            let step = span / wedges as f32;
            for w in 0..wedges {
                let a0 = slice.start + w as f32 * step;
                let a1 = a0 + step;
                let arc_points = 16;
                let mut points = vec![center];
                points.extend((0..=arc_points).map(|k| {
                    let a = a0 + (a1 - a0) * k as f32 / arc_points as f32;
                    Self::point_at(center, radius, a)
                }));
                painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            }

            if slices.len() > 1 {
                painter.line_segment(
                    [center, Self::point_at(center, radius, slice.start)],
                    Stroke::new(1.5, Color32::WHITE),
                );
            }

            if slice.fraction >= MIN_LABEL_FRACTION {
                painter.text(
                    Self::point_at(center, radius * 0.62, slice.mid_angle()),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", slice.fraction * 100.0),
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );
            }
        }

        // Legend
        let legend_x = rect.left() + width * 0.75;
        let mut legend_y = center.y - slices.len() as f32 * 11.0;
        for (i, slice) in slices.iter().enumerate() {
            let color = Self::category_color(&slice.label, i);
            let swatch = egui::Rect::from_min_size(
                Pos2::new(legend_x, legend_y - 7.0),
                egui::vec2(14.0, 14.0),
            );
            painter.rect_filled(swatch, 3.0, color);
            painter.text(
                Pos2::new(legend_x + 22.0, legend_y),
                Align2::LEFT_CENTER,
                format!("{} ({})", slice.label, slice.count),
                FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
            legend_y += 22.0;
        }
    }

    /// Stacked comment-length histogram, one series per sentiment.
    pub fn draw_length_histogram(ui: &mut egui::Ui, histogram: &LengthHistogram, height: f32) {
        let series = |sentiment: Sentiment| {
            let bars: Vec<Bar> = histogram
                .bins
                .iter()
                .map(|bin| {
                    Bar::new(bin.center(), bin.count(sentiment) as f64)
                        .width(histogram.bin_width)
                        .name(format!("{:.0}-{:.0}", bin.start, bin.end))
                })
                .collect();
            BarChart::new(bars)
                .name(sentiment.as_str())
                .color(Self::sentiment_color(sentiment))
        };

        let positive = series(Sentiment::Positive);
        let negative = series(Sentiment::Negative).stack_on(&[&positive]);

        Plot::new("length_histogram")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("length")
            .y_axis_label("count")
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(positive);
                plot_ui.bar_chart(negative);
            });
    }

    /// Draw comment length statistics table
    pub fn draw_length_stats_table(ui: &mut egui::Ui, stats: &[LengthStats]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("length_stats_table")
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["Sentiment", "N", "Mean", "Median", "Std", "Min", "Max"] {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for s in stats.iter().filter(|s| s.count > 0) {
                            ui.label(
                                RichText::new(s.sentiment.as_str())
                                    .size(12.0)
                                    .color(Self::sentiment_color(s.sentiment)),
                            );
                            ui.label(RichText::new(s.count.to_string()).size(12.0));
                            for value in [s.mean, s.median, s.std, s.min, s.max] {
                                ui.label(RichText::new(format!("{:.1}", value)).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[(&str, usize)]) -> Vec<CategoryCount> {
        values
            .iter()
            .map(|(label, count)| CategoryCount {
                label: label.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = ChartPlotter::pie_slices(&counts(&[("positive", 3), ("negative", 1)]));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[0].fraction - 0.75).abs() < 1e-6);
        assert_eq!(slices[0].end, slices[1].start);
        assert!((slices[1].end - TAU).abs() < 1e-4);
        let total: f32 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pie_slices_empty() {
        assert!(ChartPlotter::pie_slices(&[]).is_empty());
        assert!(ChartPlotter::pie_slices(&counts(&[("positive", 0)])).is_empty());
    }

    #[test]
    fn test_fixed_color_map() {
        assert_eq!(ChartPlotter::category_color("BCA Mobile", 5), NAVY);
        assert_eq!(ChartPlotter::category_color("BRImo", 5), SKY);
        assert_eq!(ChartPlotter::sentiment_color(Sentiment::Positive), NAVY);
        assert_eq!(ChartPlotter::sentiment_color(Sentiment::Negative), SKY);
        assert_eq!(ChartPlotter::category_color("Livin", 1), PALETTE[1]);
    }

    #[test]
    fn test_point_at_is_clockwise_from_top() {
        let c = Pos2::new(0.0, 0.0);
        let top = ChartPlotter::point_at(c, 10.0, 0.0);
        assert!((top.x).abs() < 1e-5 && (top.y + 10.0).abs() < 1e-5);
        let right = ChartPlotter::point_at(c, 10.0, FRAC_PI_2);
        assert!((right.x - 10.0).abs() < 1e-5 && right.y.abs() < 1e-5);
    }
}

//! Chart and dashboard visual configuration

use eframe::egui::Color32;

/// Knobs for a single market chart. One renderer serves every market; the
/// visual variations live here instead of in duplicated components.
pub struct ChartStyle {
    pub show_legend: bool,
    pub title_size: f32,
    pub title_strong: bool,
    /// Clockwise rotation of the date tick labels, degrees.
    pub tick_rotation_deg: f32,
    /// Upper bound on painted date ticks per chart.
    pub max_x_ticks: usize,
    pub line_width: f32,
    /// Radius used for values that have no drawable neighbor (gap islands).
    pub point_radius: f32,
}

pub struct PlotConfig {
    // Fixed per-market palette (one field per canonical market)
    pub color_japan: Color32,
    pub color_korea: Color32,
    pub color_taiwan: Color32,
    pub color_hong_kong: Color32,
    pub color_singapore: Color32,
    pub color_thailand: Color32,

    /// Dashboard grid width in charts.
    pub grid_columns: usize,
    /// Vertical gap between chart rows.
    pub row_spacing: f32,
    /// Space reserved under each plot for the rotated date labels.
    pub tick_label_strip: f32,
    pub tick_label_size: f32,

    pub chart: ChartStyle,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_japan: Color32::from_rgb(255, 99, 132),      // #FF6384
    color_korea: Color32::from_rgb(54, 162, 235),      // #36A2EB
    color_taiwan: Color32::from_rgb(255, 206, 86),     // #FFCE56
    color_hong_kong: Color32::from_rgb(75, 192, 192),  // #4BC0C0
    color_singapore: Color32::from_rgb(153, 102, 255), // #9966FF
    color_thailand: Color32::from_rgb(255, 159, 64),   // #FF9F40

    grid_columns: 3,
    row_spacing: 14.0,
    tick_label_strip: 34.0,
    tick_label_size: 9.0,

    chart: ChartStyle {
        show_legend: false,
        title_size: 16.0,
        title_strong: true,
        tick_rotation_deg: 45.0,
        max_x_ticks: 8,
        line_width: 1.5,
        point_radius: 2.0,
    },
};

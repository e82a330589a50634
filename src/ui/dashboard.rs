use eframe::egui::{CentralPanel, Context, RichText, ScrollArea};
use strum::IntoEnumIterator;

use crate::{
    config::PLOT_CONFIG,
    domain::{Market, MarketTable},
    ui::{chart::render_market_chart, ui_config::UI_CONFIG, ui_text::UI_TEXT},
};

/// The Ready screen: page heading plus the fixed market grid. Every chart
/// reads from the same table; an empty table still renders all six charts.
pub(crate) fn render_dashboard(ctx: &Context, table: &MarketTable) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.heading(
                RichText::new(&UI_TEXT.app_title)
                    .size(26.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(10.0);
        });

        let markets: Vec<Market> = Market::iter().collect();
        let columns = PLOT_CONFIG.grid_columns;
        let rows = markets.len().div_ceil(columns);
        let spacing = (rows.saturating_sub(1)) as f32 * PLOT_CONFIG.row_spacing;
        let cell_height = ((ui.available_height() - spacing) / rows as f32).max(180.0);

        ScrollArea::vertical().show(ui, |ui| {
            for row_markets in markets.chunks(columns) {
                ui.columns(columns, |cells| {
                    for (cell, market) in cells.iter_mut().zip(row_markets) {
                        render_market_chart(cell, table, *market, cell_height);
                    }
                });
                ui.add_space(PLOT_CONFIG.row_spacing);
            }
        });
    });
}

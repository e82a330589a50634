use eframe::egui::{CentralPanel, Context, RichText};

use crate::ui::{ui_config::UI_CONFIG, ui_text::UI_TEXT};

/// Shown from first frame until the fetch resolves; nothing else renders.
pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(&UI_TEXT.loading_heading)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&UI_TEXT.loading_detail)
                    .italics()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(16.0);
            ui.spinner();
        });
    });
}

/// Terminal failure screen: the error message replaces the chart grid
/// entirely; no partial grid is ever shown next to an error.
pub(crate) fn render_error(ctx: &Context, message: &str) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.heading(
                RichText::new(&UI_TEXT.error_heading)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.error),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(message).color(UI_CONFIG.colors.label));
        });
    });
}

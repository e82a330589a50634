use eframe::egui::Color32;

use crate::{config::PLOT_CONFIG, domain::Market};

/// Per-market line color. The match is total over the canonical enum, so a
/// market can never render with the wrong palette slot, and the assignment
/// depends only on market identity, never on the data.
pub(crate) trait MarketColor {
    fn color(&self) -> Color32;
}

impl MarketColor for Market {
    fn color(&self) -> Color32 {
        match self {
            Self::Japan => PLOT_CONFIG.color_japan,
            Self::Korea => PLOT_CONFIG.color_korea,
            Self::Taiwan => PLOT_CONFIG.color_taiwan,
            Self::HongKong => PLOT_CONFIG.color_hong_kong,
            Self::Singapore => PLOT_CONFIG.color_singapore,
            Self::Thailand => PLOT_CONFIG.color_thailand,
        }
    }
}

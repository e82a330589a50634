// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::SheetsConfig;
pub use data::{SheetsError, load_market_table};
pub use domain::{Market, MarketTable, StockRecord};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Spreadsheet id (overrides the SHEETS_ID environment variable)
    #[arg(long)]
    pub sheet_id: Option<String>,

    /// API key for the spreadsheet service (overrides SHEETS_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// A1 range to fetch, e.g. "Sheet1!A:G" (overrides SHEETS_RANGE)
    #[arg(long)]
    pub range: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

mod load;
mod normalize;
mod sheets;

pub use {
    load::load_market_table,
    normalize::normalize,
    sheets::{SheetsClient, SheetsError},
};

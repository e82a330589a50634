mod market;
mod record;

pub use market::Market;
pub use record::{MarketTable, StockRecord};

// The async load that runs before the dashboard has anything to draw.

use crate::config::SheetsConfig;
use crate::data::{SheetsClient, SheetsError, normalize};
use crate::domain::MarketTable;

/// Fetch + normalize, the whole pipeline behind the Loading screen. Exactly
/// one call per app lifetime; the result replaces the table wholesale.
pub async fn load_market_table(config: &SheetsConfig) -> Result<MarketTable, SheetsError> {
    let client = SheetsClient::new(config.clone())?;
    let values = client.fetch_values().await?;
    let table = MarketTable::new(normalize(&values));
    log::info!(
        "normalized {} sheet rows into {} records",
        values.len(),
        table.len()
    );
    Ok(table)
}

use strum::EnumCount;

use crate::domain::Market;

/// One spreadsheet data row after normalization. The date is passed through
/// untouched; every market slot is the parsed cell or None where the cell
/// did not coerce to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    pub date: String,
    values: [Option<f64>; Market::COUNT],
}

impl StockRecord {
    pub fn new(date: String, values: [Option<f64>; Market::COUNT]) -> Self {
        Self { date, values }
    }

    pub fn value(&self, market: Market) -> Option<f64> {
        self.values[market.index()]
    }
}

/// The full normalized sheet, written once per fetch and read by every chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketTable {
    pub records: Vec<StockRecord>,
}

impl MarketTable {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One market's (date, value) sequence in record order. Recomputed on
    /// every call; nothing is cached between renders.
    pub fn series(&self, market: Market) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.records
            .iter()
            .map(move |r| (r.date.as_str(), r.value(market)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, japan: Option<f64>) -> StockRecord {
        let mut values = [None; Market::COUNT];
        values[Market::Japan.index()] = japan;
        StockRecord::new(date.to_string(), values)
    }

    #[test]
    fn series_preserves_record_order() {
        let table = MarketTable::new(vec![
            record("2024-01-01", Some(100.5)),
            record("2024-01-02", None),
            record("2024-01-03", Some(101.0)),
        ]);

        let series: Vec<_> = table.series(Market::Japan).collect();
        assert_eq!(
            series,
            vec![
                ("2024-01-01", Some(100.5)),
                ("2024-01-02", None),
                ("2024-01-03", Some(101.0)),
            ]
        );
    }

    #[test]
    fn unset_markets_read_as_none() {
        let table = MarketTable::new(vec![record("2024-01-01", Some(1.0))]);
        assert_eq!(table.series(Market::Korea).next(), Some(("2024-01-01", None)));
    }
}

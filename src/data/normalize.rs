use strum::{EnumCount, IntoEnumIterator};

use crate::domain::{Market, StockRecord};

/// Reshape the raw 2-D cell array into per-date records. Row 0 is the header;
/// every following row becomes exactly one record, in input order.
pub fn normalize(values: &[Vec<String>]) -> Vec<StockRecord> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };
    let columns = market_columns(header);

    rows.iter()
        .map(|row| {
            let date = row.first().cloned().unwrap_or_default();
            let mut cells = [None; Market::COUNT];
            for market in Market::iter() {
                cells[market.index()] = columns[market.index()]
                    .and_then(|col| row.get(col))
                    .and_then(|cell| parse_cell(cell));
            }
            StockRecord::new(date, cells)
        })
        .collect()
}

/// Header-driven column mapping. Column 0 is always the date column and is
/// never matched; the remaining header cells are compared case-insensitively
/// against each market's label. Unrecognized headers are dropped silently; a
/// market absent from the header yields None in every record.
fn market_columns(header: &[String]) -> [Option<usize>; Market::COUNT] {
    let mut columns = [None; Market::COUNT];
    for market in Market::iter() {
        columns[market.index()] = header
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, cell)| cell.trim().eq_ignore_ascii_case(market.header_label()))
            .map(|(idx, _)| idx);
    }
    columns
}

// One bad cell never invalidates its neighbors: coercion failure is just None.
fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse().ok()
}

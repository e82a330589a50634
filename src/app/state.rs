// src/app/state.rs

use crate::data::SheetsError;
use crate::domain::MarketTable;

/// The dashboard lifecycle. Loading is the initial state; Ready and Error
/// are terminal (a new fetch only happens with a new process).
pub(crate) enum DashState {
    Loading,
    Ready(MarketTable),
    Error(String),
}

impl Default for DashState {
    fn default() -> Self {
        DashState::Loading
    }
}

impl DashState {
    /// The single transition out of Loading. An empty table is still Ready:
    /// six charts with no points, not an error.
    pub(crate) fn from_fetch(result: Result<MarketTable, SheetsError>) -> Self {
        match result {
            Ok(table) => {
                log::info!("dashboard ready with {} records", table.len());
                DashState::Ready(table)
            }
            Err(e) => {
                log::error!("data load failed: {}", e);
                DashState::Error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_fetch_reaches_ready() {
        let state = DashState::from_fetch(Ok(MarketTable::default()));
        assert!(matches!(state, DashState::Ready(t) if t.is_empty()));
    }

    #[test]
    fn http_failure_reaches_error_with_the_status_in_the_message() {
        let state = DashState::from_fetch(Err(SheetsError::HttpStatus(403)));
        match state {
            DashState::Error(message) => assert!(message.contains("403")),
            _ => panic!("expected the error state"),
        }
    }

    #[test]
    fn initial_state_is_loading() {
        assert!(matches!(DashState::default(), DashState::Loading));
    }
}

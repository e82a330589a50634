use serde::Deserialize;
use thiserror::Error;

use crate::config::{SHEETS, SheetsConfig};

/// Everything that can go wrong between "start a fetch" and "hold a 2-D cell
/// array". Each variant renders as the user-visible error-screen message, so
/// the display strings name what failed, not how.
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    #[error("request timed out after {0}ms")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),

    #[error("spreadsheet API returned HTTP {0}")]
    HttpStatus(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The wire envelope of the values endpoint. Extra fields (range,
/// majorDimension) are ignored; a present-but-empty `values` is valid.
#[derive(Deserialize)]
struct ValueRange {
    values: Option<Vec<Vec<String>>>,
}

pub struct SheetsClient {
    config: SheetsConfig,
    http: reqwest::Client,
}

impl SheetsClient {
    /// Fails fast on empty credentials: no request is ever issued with an
    /// unusable sheet id or key.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        if config.sheet_id.trim().is_empty() {
            return Err(SheetsError::MissingConfig("sheet id"));
        }
        if config.api_key.trim().is_empty() {
            return Err(SheetsError::MissingConfig("api key"));
        }
        let http = build_http_client().map_err(|e| SheetsError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// One GET, no retries. Returns the raw rows exactly as delivered.
    pub async fn fetch_values(&self) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url();
        log::info!("fetching spreadsheet values from {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            log::error!("spreadsheet API rejected the request: HTTP {}", status);
            return Err(SheetsError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_values_body(&body)
    }

    // The key travels as a query parameter instead, so this is safe to log.
    fn values_url(&self) -> String {
        format!(
            "{}/{}/values/{}",
            SHEETS.base_url, self.config.sheet_id, self.config.range
        )
    }
}

fn build_http_client() -> reqwest::Result<reqwest::Client> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(SHEETS.timeout_ms))
            .build()
    }
    #[cfg(target_arch = "wasm32")]
    {
        reqwest::Client::builder().build()
    }
}

fn transport_error(e: reqwest::Error) -> SheetsError {
    if e.is_timeout() {
        log::error!("spreadsheet request timed out: {}", e);
        SheetsError::Timeout(SHEETS.timeout_ms)
    } else {
        log::error!("spreadsheet request failed without a usable response: {}", e);
        SheetsError::Network(e.to_string())
    }
}

/// Pure parsing seam: JSON decode + `values` extraction, shared by the client
/// and the tests. Both failure modes are MalformedResponse, with the detail
/// in the message.
fn parse_values_body(body: &str) -> Result<Vec<Vec<String>>, SheetsError> {
    let envelope: ValueRange = serde_json::from_str(body)
        .map_err(|e| SheetsError::MalformedResponse(format!("invalid JSON body: {e}")))?;
    envelope
        .values
        .ok_or_else(|| SheetsError::MalformedResponse("body has no `values` field".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SheetsConfig {
        SheetsConfig::new("sheet-123", "key-456", "Sheet1")
    }

    #[test]
    fn empty_sheet_id_fails_before_any_request() {
        let err = SheetsClient::new(SheetsConfig::new("", "key", "Sheet1")).err();
        assert!(matches!(err, Some(SheetsError::MissingConfig("sheet id"))));
    }

    #[test]
    fn empty_api_key_fails_before_any_request() {
        let err = SheetsClient::new(SheetsConfig::new("sheet", "  ", "Sheet1")).err();
        assert!(matches!(err, Some(SheetsError::MissingConfig("api key"))));
    }

    #[test]
    fn url_targets_the_values_endpoint() {
        let client = SheetsClient::new(config()).unwrap();
        assert_eq!(
            client.values_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-123/values/Sheet1"
        );
    }

    #[test]
    fn well_formed_body_round_trips() {
        let body = r#"{"range":"Sheet1!A1:C3","majorDimension":"ROWS",
                       "values":[["Date","JAPAN"],["2024-01-01","100.5"]]}"#;
        let values = parse_values_body(body).unwrap();
        assert_eq!(values, vec![
            vec!["Date".to_string(), "JAPAN".to_string()],
            vec!["2024-01-01".to_string(), "100.5".to_string()],
        ]);
    }

    #[test]
    fn invalid_json_is_a_malformed_response() {
        let err = parse_values_body("<!doctype html>").unwrap_err();
        assert!(matches!(err, SheetsError::MalformedResponse(_)));
    }

    #[test]
    fn missing_values_field_is_a_malformed_response() {
        let err = parse_values_body(r#"{"range":"Sheet1"}"#).unwrap_err();
        assert!(matches!(err, SheetsError::MalformedResponse(_)));
        assert!(err.to_string().contains("values"));
    }

    #[test]
    fn wrong_nesting_is_a_malformed_response() {
        let err = parse_values_body(r#"{"values":["flat","not","rows"]}"#).unwrap_err();
        assert!(matches!(err, SheetsError::MalformedResponse(_)));
    }

    #[test]
    fn error_messages_are_presentable() {
        assert_eq!(
            SheetsError::HttpStatus(403).to_string(),
            "spreadsheet API returned HTTP 403"
        );
        assert_eq!(
            SheetsError::MissingConfig("sheet id").to_string(),
            "missing configuration: sheet id is not set"
        );
    }
}

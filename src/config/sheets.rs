use crate::Cli;

/// Spreadsheet API constants: endpoint, request timeout, default range.
pub struct SheetsApiConfig {
    pub base_url: &'static str,
    pub timeout_ms: u64,
    pub default_range: &'static str,
}

pub const SHEETS: SheetsApiConfig = SheetsApiConfig {
    base_url: "https://sheets.googleapis.com/v4/spreadsheets",
    timeout_ms: 10_000,
    default_range: "Sheet1",
};

/// Runtime spreadsheet credentials and range, resolved once at startup and
/// handed to the client explicitly. Nothing on the fetch path reads ambient
/// state after this point.
///
/// Precedence per field: CLI flag, then process env, then compile-time env
/// (`SHEETS_ID` / `SHEETS_API_KEY` / `SHEETS_RANGE`). The compile-time step
/// is what wasm builds use, where no process env exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetsConfig {
    pub sheet_id: String,
    pub api_key: String,
    pub range: String,
}

impl SheetsConfig {
    pub fn new(
        sheet_id: impl Into<String>,
        api_key: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            api_key: api_key.into(),
            range: range.into(),
        }
    }

    pub fn resolve(args: &Cli) -> Self {
        Self {
            sheet_id: pick(&args.sheet_id, "SHEETS_ID", option_env!("SHEETS_ID")),
            api_key: pick(&args.api_key, "SHEETS_API_KEY", option_env!("SHEETS_API_KEY")),
            range: {
                let range = pick(&args.range, "SHEETS_RANGE", option_env!("SHEETS_RANGE"));
                if range.is_empty() {
                    SHEETS.default_range.to_string()
                } else {
                    range
                }
            },
        }
    }
}

fn pick(cli: &Option<String>, env_key: &str, baked: Option<&'static str>) -> String {
    if let Some(value) = cli {
        return value.clone();
    }
    if let Ok(value) = std::env::var(env_key) {
        if !value.is_empty() {
            return value;
        }
    }
    baked.unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_win_over_everything() {
        let args = Cli {
            sheet_id: Some("cli-sheet".into()),
            api_key: Some("cli-key".into()),
            range: Some("Sheet1!A:G".into()),
        };
        let config = SheetsConfig::resolve(&args);
        assert_eq!(config.sheet_id, "cli-sheet");
        assert_eq!(config.api_key, "cli-key");
        assert_eq!(config.range, "Sheet1!A:G");
    }

    #[test]
    fn missing_range_falls_back_to_default() {
        // No CLI range and (in the test environment) no SHEETS_RANGE set.
        let args = Cli {
            sheet_id: Some("s".into()),
            api_key: Some("k".into()),
            range: None,
        };
        let config = SheetsConfig::resolve(&args);
        assert_eq!(config.range, SHEETS.default_range);
    }
}

use super::dto::ValueRangeResponse;
use super::model::CatalogKind;
use super::source::{RowSource, Rows, SourceError};
use crate::http::build_client;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{error, info};

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// Reads the tabs of a public spreadsheet through the Sheets v4 API.
pub struct GoogleSheetsAPI {
    client: ClientWithMiddleware,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
}

impl GoogleSheetsAPI {
    pub fn new(base_url: &str, spreadsheet_id: &str, api_key: &str, max_retries: u32) -> Self {
        Self {
            client: build_client(max_retries),
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn values_url(&self, sheet: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, sheet
        )
    }
}

impl RowSource for GoogleSheetsAPI {
    #[tracing::instrument(skip(self))]
    async fn fetch_rows(&self, kind: CatalogKind) -> Result<Rows, SourceError> {
        let sheet = kind.sheet_name();

        info!("Getting rows of '{}'", sheet);

        let response = self
            .client
            .get(self.values_url(sheet))
            .query(&[("key", &self.api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            error!("Sheets API answered {} for '{}'", response.status(), sheet);

            return Err(SourceError::Status {
                sheet,
                status: response.status(),
            });
        }

        let parsed_response = response.json::<ValueRangeResponse>().await?;

        info!("Got {} rows", parsed_response.values.len());

        Ok(parsed_response.values)
    }
}

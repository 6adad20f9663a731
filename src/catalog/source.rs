use super::model::CatalogKind;
use std::collections::HashMap;
use thiserror::Error;

pub type Rows = Vec<Vec<String>>;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    #[error("unexpected status {status} for '{sheet}'")]
    Status {
        sheet: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(#[from] reqwest::Error),

    #[error("no data for '{0}'")]
    Missing(&'static str),
}

/// Where the raw rows of a tab come from, header row included.
#[allow(async_fn_in_trait)]
pub trait RowSource {
    async fn fetch_rows(&self, kind: CatalogKind) -> Result<Rows, SourceError>;
}

/// Rows held in memory, e.g. already downloaded or fixtures.
#[derive(Debug, Default, Clone)]
pub struct StaticRows {
    rows: HashMap<CatalogKind, Rows>,
}

impl StaticRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: CatalogKind, rows: Rows) -> Self {
        self.rows.insert(kind, rows);
        self
    }
}

impl RowSource for StaticRows {
    async fn fetch_rows(&self, kind: CatalogKind) -> Result<Rows, SourceError> {
        self.rows
            .get(&kind)
            .cloned()
            .ok_or(SourceError::Missing(kind.sheet_name()))
    }
}

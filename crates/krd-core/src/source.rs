use crate::config::AirtableConfig;
use crate::error::{ConfigError, FetchError};
use crate::record::Record;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// View every page reads from.
pub const DEFAULT_VIEW: &str = "data";

/// Where records come from.
///
/// `fetch_records` keeps the failure reason; `fetch` is what the pages call
/// and turns every failure into an empty list after logging it.
pub trait RecordSource: Send + Sync {
    fn fetch_records(&self, table: &str, view: &str) -> Result<Vec<Record>, FetchError>;

    fn fetch(&self, table: &str, view: &str) -> Vec<Record> {
        match self.fetch_records(table, view) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(
                    table,
                    view,
                    status = ?err.status(),
                    error = %err,
                    "failed to fetch records"
                );
                Vec::new()
            }
        }
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Arc<T> {
    fn fetch_records(&self, table: &str, view: &str) -> Result<Vec<Record>, FetchError> {
        (**self).fetch_records(table, view)
    }
}

pub struct AirtableClient {
    agent: ureq::Agent,
    base_url: String,
    base_id: String,
    token: String,
}

impl std::fmt::Debug for AirtableClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableClient")
            .field("base_url", &self.base_url)
            .field("base_id", &self.base_id)
            .finish_non_exhaustive()
    }
}

impl AirtableClient {
    pub fn new(config: &AirtableConfig) -> Self {
        let timeout = Duration::from_millis(config.timeout_ms.max(1));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_id: config.base_id.clone(),
            token: config.token.clone(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/v0/{}/{}", self.base_url, self.base_id, table)
    }
}

impl RecordSource for AirtableClient {
    fn fetch_records(&self, table: &str, view: &str) -> Result<Vec<Record>, FetchError> {
        let url = self.table_url(table);
        tracing::debug!(table, view, url = %url, "fetching records");

        let response = self
            .agent
            .get(&url)
            .query("view", view)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .call();

        match response {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| FetchError::Decode(e.to_string()))?;
                parse_page(&body, table, view)
            }
            Err(ureq::Error::Status(status, resp)) => Err(FetchError::Status {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(err)) => Err(FetchError::Transport(err.to_string())),
        }
    }
}

/// List-records body before the rows are decoded one by one.
#[derive(Debug, Default, Deserialize)]
struct RawPage {
    records: Option<Vec<Value>>,
    offset: Option<String>,
}

/// Decodes a list-records body. A body without `records` is an empty
/// result; a trailing `offset` is not followed. Rows that do not have the
/// record shape are dropped without failing the page.
pub fn parse_page(body: &str, table: &str, view: &str) -> Result<Vec<Record>, FetchError> {
    let page =
        serde_json::from_str::<RawPage>(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(offset) = page.offset.as_deref() {
        tracing::debug!(table, view, offset, "ignoring pagination offset; results truncated");
    }

    match page.records {
        Some(rows) => Ok(decode_rows(rows, table)),
        None => {
            tracing::warn!(table, view, "no records found");
            Ok(Vec::new())
        }
    }
}

fn decode_rows(rows: Vec<Value>, table: &str) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Record>(row) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::debug!(table, index, error = %err, "dropping malformed record");
                None
            }
        })
        .collect()
}

/// In-memory record tables, loaded from a fixture file or built in code.
#[derive(Debug, Default)]
pub struct StaticSource {
    tables: HashMap<String, Vec<Record>>,
    failures: HashMap<String, FetchError>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: impl Into<String>, records: Vec<Record>) -> Self {
        self.tables.insert(table.into(), records);
        self
    }

    pub fn with_failure(mut self, table: impl Into<String>, err: FetchError) -> Self {
        self.failures.insert(table.into(), err);
        self
    }

    pub fn with_delay(mut self, table: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(table.into(), delay);
        self
    }

    /// Fixture format: an object keyed by table name, each value either a
    /// list-records body (`{"records": [...]}`) or a bare record list.
    pub fn from_json(value: &Value) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| "fixtures must be an object keyed by table name".to_string())?;

        let mut source = Self::new();
        for (table, entry) in obj {
            let rows = match entry {
                Value::Array(rows) => rows.clone(),
                _ => serde_json::from_value::<RawPage>(entry.clone())
                    .map_err(|e| format!("table '{table}': {e}"))?
                    .records
                    .unwrap_or_default(),
            };
            source.tables.insert(table.clone(), decode_rows(rows, table));
        }
        Ok(source)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let fixtures_error = |message: String| ConfigError::Fixtures {
            path: path.to_path_buf(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|e| fixtures_error(e.to_string()))?;
        let value =
            serde_json::from_str::<Value>(&content).map_err(|e| fixtures_error(e.to_string()))?;
        Self::from_json(&value).map_err(fixtures_error)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl RecordSource for StaticSource {
    fn fetch_records(&self, table: &str, view: &str) -> Result<Vec<Record>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(table) {
            std::thread::sleep(*delay);
        }
        if let Some(err) = self.failures.get(table) {
            return Err(err.clone());
        }
        tracing::trace!(table, view, "serving fixture records");
        Ok(self.tables.get(table).cloned().unwrap_or_default())
    }
}

//! HTTP client for the league store's REST surface

use reqwest::{header::HeaderMap, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::query::{Cardinality, Select};
use crate::{
    core::{config::StoreConfig, http::header_names, store_headers},
    error::LeagueError,
    Result,
};


/// Path of the REST endpoint below the project base URL.
pub const REST_PATH: &str = "/rest/v1";

/// Error code the store uses when a single row was expected.
pub const MULTIPLE_ROWS_CODE: &str = "PGRST116";

const USER_AGENT: &str = concat!("dynasty-ffl/", env!("CARGO_PKG_VERSION"));

/// Error body the store sends with non-success responses.
#[derive(Debug, Default, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

fn store_error(status: StatusCode, body: &str) -> LeagueError {
    let parsed: StoreErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message.unwrap_or_else(|| {
        if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.trim().to_string()
        }
    });
    LeagueError::Store {
        status: status.as_u16(),
        code: parsed.code,
        message,
        details: parsed.details,
        hint: parsed.hint,
    }
}

fn multiple_rows_error(count: usize) -> LeagueError {
    LeagueError::Store {
        status: StatusCode::NOT_ACCEPTABLE.as_u16(),
        code: Some(MULTIPLE_ROWS_CODE.to_string()),
        message: "JSON object requested, multiple (or no) rows returned".to_string(),
        details: Some(format!(
            "Results contain {} rows, application/vnd.pgrst.object+json requires 1 row",
            count
        )),
        hint: None,
    }
}

/// Read-only client for the league store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    rest_url: String,
    headers: HeaderMap,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            rest_url: format!("{}{}", config.base_url.trim_end_matches('/'), REST_PATH),
            headers: store_headers(&config.api_key)?,
        })
    }

    /// Full URL of a table endpoint.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    /// Run a read and decode every returned row.
    pub async fn fetch_rows<T: DeserializeOwned>(&self, select: &Select) -> Result<Vec<T>> {
        let rows = self.execute(select).await?;
        Ok(serde_json::from_value(rows)?)
    }

    /// Run a read that expects zero or one row.
    ///
    /// Zero rows is `Ok(None)`; more than one is a `PGRST116` store error.
    pub async fn fetch_maybe_single<T: DeserializeOwned>(
        &self,
        select: &Select,
    ) -> Result<Option<T>> {
        let mut rows: Vec<T> = self.fetch_rows(select).await?;
        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            n => Err(multiple_rows_error(n)),
        }
    }

    async fn execute(&self, select: &Select) -> Result<Value> {
        let url = self.table_url(&select.table);
        let params = select.to_query_params();

        debug!(
            url = %url,
            params = ?params,
            headers = ?header_names(&self.headers),
            single = select.cardinality == Cardinality::MaybeSingle,
            "store read"
        );

        let response = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let err = store_error(status, &body);
            warn!(table = %select.table, error = %err, "store read failed");
            return Err(err);
        }

        let body = response.json::<Value>().await?;
        Ok(match body {
            Value::Array(_) => body,
            Value::Null => Value::Array(Vec::new()),
            other => Value::Array(vec![other]),
        })
    }
}

//! REST Table Store
//!
//! PostgREST-style client for the hosted tables. Rows are selected with
//! `order=created_at.desc`, single-row writes ask for the object
//! representation back, and error bodies surface their `message`.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::connection::BackendConfig;
use crate::constants::{ORDER_COLUMN, REST_PREFIX};
use crate::domain::{Editable, Record, RecordId};
use crate::error::{Error, Result};
use crate::services::table_store::TableStore;

/// Accept header asking for a single JSON object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Error body returned by the table API
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

/// Table store backed by the hosted REST API
#[derive(Clone)]
pub struct RestTableStore {
    client: Client,
    base_url: String,
    auth: HeaderMap,
}

impl RestTableStore {
    /// Build a client; the API key goes on every request it makes
    pub fn new(config: &BackendConfig) -> Result<Self> {
        config.validate()?;

        let key = HeaderValue::from_str(&config.api_key).map_err(|e| Error::Config {
            message: format!("API key is not a valid header value: {e}"),
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|e| {
            Error::Config {
                message: format!("API key is not a valid header value: {e}"),
            }
        })?;

        let mut auth = HeaderMap::new();
        auth.insert("apikey", key);
        auth.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PREFIX, table)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .headers(self.auth.clone())
    }

    fn single_row(request: RequestBuilder) -> RequestBuilder {
        request
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
    }

    fn select_request<R: Record>(&self) -> RequestBuilder {
        let order = format!("{ORDER_COLUMN}.desc");
        self.request(Method::GET, R::TABLE)
            .query(&[("select", "*"), ("order", order.as_str())])
    }

    /// The API takes an array of rows; a one-element array inserts one row
    fn insert_request<R: Record>(&self, draft: &R::Draft) -> RequestBuilder {
        Self::single_row(self.request(Method::POST, R::TABLE)).json(&[draft])
    }

    fn update_request<R: Editable>(&self, record: &R) -> RequestBuilder {
        let filter = format!("eq.{}", record.id());
        Self::single_row(self.request(Method::PATCH, R::TABLE))
            .query(&[("id", filter.as_str())])
            .json(record)
    }

    fn delete_request<R: Editable>(&self, id: &RecordId) -> RequestBuilder {
        let filter = format!("eq.{id}");
        self.request(Method::DELETE, R::TABLE)
            .query(&[("id", filter.as_str())])
    }

    async fn send(table: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
        warn!(
            table,
            status = status.as_u16(),
            code = body.code.as_deref().unwrap_or(""),
            details = body.details.as_deref().unwrap_or(""),
            hint = body.hint.as_deref().unwrap_or(""),
            "Table store request failed"
        );

        Err(Error::Store {
            table: table.to_string(),
            status: Some(status.as_u16()),
            message: body.message,
        })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(response.json::<T>().await?)
    }
}

impl TableStore for RestTableStore {
    async fn select_all<R: Record>(&self) -> Result<Vec<R>> {
        let response = Self::send(R::TABLE, self.select_request::<R>()).await?;
        let rows: Vec<R> = Self::json(response).await?;
        debug!(table = R::TABLE, rows = rows.len(), "Selected rows");
        Ok(rows)
    }

    async fn insert<R: Record>(&self, draft: &R::Draft) -> Result<R> {
        let response = Self::send(R::TABLE, self.insert_request::<R>(draft)).await?;
        let row: R = Self::json(response).await?;
        debug!(table = R::TABLE, id = %row.id(), "Inserted row");
        Ok(row)
    }

    async fn update<R: Editable>(&self, record: &R) -> Result<R> {
        let response = Self::send(R::TABLE, self.update_request(record)).await?;
        let row: R = Self::json(response).await?;
        debug!(table = R::TABLE, id = %row.id(), "Updated row");
        Ok(row)
    }

    async fn delete<R: Editable>(&self, id: &RecordId) -> Result<RecordId> {
        Self::send(R::TABLE, self.delete_request::<R>(id)).await?;
        debug!(table = R::TABLE, %id, "Deleted row");
        Ok(id.clone())
    }
}

impl std::fmt::Debug for RestTableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestTableStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

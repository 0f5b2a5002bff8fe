//! PostgREST-style remote store client.
//!
//! The remote record store exposes the `persons` table through a
//! Supabase-compatible REST endpoint: `<url>/rest/v1/persons`, with the
//! project key supplied as both `apikey` and bearer token. Row shapes are
//! translated through [`RecordRow`] at this boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;

use crate::config::RemoteConfig;
use crate::models::Record;
use crate::store::remote::{RemoteError, RemoteResult, RemoteStore};
use crate::store::row::RecordRow;

const TABLE: &str = "persons";

/// HTTP client for the remote record store.
#[derive(Debug, Clone)]
pub struct PostgrestRemote {
    client: reqwest::Client,
    table_url: String,
}

impl PostgrestRemote {
    /// Build a client from the two remote configuration values.
    ///
    /// A bounded request timeout is applied here; the upstream transport
    /// default is unbounded enough that a dead endpoint would otherwise
    /// hang list views.
    pub fn new(config: &RemoteConfig, timeout: Duration) -> RemoteResult<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| RemoteError::InvalidUrl(format!("invalid api key header: {e}")))?;
        headers.insert("apikey", key);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| RemoteError::InvalidUrl(format!("invalid api key header: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = config.url.trim_end_matches('/');
        reqwest::Url::parse(base)
            .map_err(|e| RemoteError::InvalidUrl(format!("{base}: {e}")))?;

        Ok(Self {
            client,
            table_url: format!("{base}/rest/v1/{TABLE}"),
        })
    }

    async fn check(response: reqwest::Response) -> RemoteResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::Status { status, body })
    }

    async fn read_rows(response: reqwest::Response) -> RemoteResult<Vec<Record>> {
        let body = Self::check(response).await?.text().await?;
        let rows: Vec<RecordRow> = serde_json::from_str(&body)?;
        Ok(rows.into_iter().map(Record::from).collect())
    }
}

#[async_trait]
impl RemoteStore for PostgrestRemote {
    async fn insert(&self, record: &Record) -> RemoteResult<()> {
        debug!(id = %record.id, "inserting record into remote store");
        let row = RecordRow::from_record(record);
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_all(&self) -> RemoteResult<Vec<Record>> {
        debug!("fetching all records from remote store");
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn get_by_id(&self, id: &str) -> RemoteResult<Option<Record>> {
        debug!(%id, "fetching record from remote store");
        let filter = format!("eq.{id}");
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("id", filter.as_str())])
            .send()
            .await?;
        Ok(Self::read_rows(response).await?.into_iter().next())
    }

    async fn delete_by_id(&self, id: &str) -> RemoteResult<()> {
        debug!(%id, "deleting record from remote store");
        let filter = format!("eq.{id}");
        let response = self
            .client
            .delete(&self.table_url)
            .query(&[("id", filter.as_str())])
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

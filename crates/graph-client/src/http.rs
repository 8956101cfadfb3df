//! HTTP implementation of the graph facade contract.
//!
//! Endpoints, as the facade exposes them:
//! - `GET /search?type={movie|actor}&q={query}` -> array of node property maps
//! - `GET /{id}/{relation}` -> `{"data": [...]}`
//! - `GET /{id}` -> one node's property map

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::types::{EntityKind, GraphService, NodeRecord, Relation, RelatedResponse};

/// Connection settings for the graph facade.
#[derive(Debug, Clone)]
pub struct GraphClientConfig {
    pub base_url: String,
    /// Per-request deadline; a call past this fails with [`GraphError::Timeout`].
    pub timeout: Duration,
}

impl GraphClientConfig {
    /// Settings for a facade at `base_url` with the default 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// REST/JSON client for the graph facade.
///
/// Calls are not retried here: a failed run is retried whole by the caller,
/// so the client reports the first failure as-is.
pub struct HttpGraphClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpGraphClient {
    pub fn new(config: GraphClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        }
    }

    /// Base URL this client points at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single node's properties (`GET /{id}`).
    ///
    /// Not part of [`GraphService`]; the suggestion engine never needs it,
    /// but it is handy for poking at the graph from the command line.
    pub async fn node(&self, node_id: &str) -> Result<NodeRecord> {
        let url = format!("{}/{}", self.base_url, node_id);
        self.get_json(&url, &[]).await
    }

    /// Issue one GET and decode the JSON body.
    ///
    /// The body is read as text first so that decode failures keep the raw
    /// transport error channel separate from malformed-payload reporting.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| GraphError::Timeout(self.timeout))??;

        let status = response.status();
        if !status.is_success() {
            return Err(GraphError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.text())
            .await
            .map_err(|_| GraphError::Timeout(self.timeout))??;

        serde_json::from_str(&body).map_err(|source| GraphError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl GraphService for HttpGraphClient {
    async fn search(&self, kind: EntityKind, query: &str) -> Result<Vec<NodeRecord>> {
        let url = format!("{}/search", self.base_url);
        debug!("searching {} nodes with query {:?}", kind.as_str(), query);
        let hits: Vec<NodeRecord> = self
            .get_json(&url, &[("type", kind.as_str()), ("q", query)])
            .await?;
        debug!("search for {:?} returned {} hits", query, hits.len());
        Ok(hits)
    }

    async fn related(&self, node_id: &str, relation: Relation) -> Result<Vec<NodeRecord>> {
        let url = format!("{}/{}/{}", self.base_url, node_id, relation.as_str());
        let response: RelatedResponse = self.get_json(&url, &[]).await?;
        debug!(
            "node {} has {} entries under {}",
            node_id,
            response.data.len(),
            relation.as_str()
        );
        Ok(response.data)
    }
}

//! Content store client
//!
//! The store is an optional dependency: when no project identifier is
//! configured the client runs "disconnected" and every query resolves to an
//! empty or absent result without touching the network. Rather than a null
//! check at every call site, the two modes are variants of [`ContentClient`]
//! and the disconnected variant answers every query in constant time.
//!
//! Query-time faults (transport, timeout, bad status, malformed body) are a
//! different thing entirely: those surface as [`Error`] values so callers
//! can apply the fallback policy in [`crate::fallback`].

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// A named query parameter bound server-side (e.g. `$slug`).
pub type QueryParam<'a> = (&'a str, &'a str);

/// Read-only source of content documents.
///
/// The HTTP store client is the production implementation; tests inject
/// scripted sources through [`ContentClient::with_source`].
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Execute a projection query and return the raw `result` payload.
    ///
    /// A query that matches nothing yields `Value::Null` for single-entity
    /// queries and an empty array for list queries; both are success cases.
    async fn fetch(&self, query: &str, params: &[QueryParam<'_>]) -> Result<serde_json::Value>;
}

/// Response envelope returned by the store's query endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub result: serde_json::Value,
}

/// HTTP reader bound to one project/dataset pair
pub struct StoreClient {
    http: reqwest::Client,
    query_url: String,
    token: Option<String>,
}

impl StoreClient {
    /// Build an HTTP client for the configured project.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let base_url = config.resolve_base_url()?;
        let query_url = format!(
            "{}/v{}/data/query/{}",
            base_url, config.api_version, config.dataset
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            query_url,
            token: config.token.clone(),
        })
    }

    /// The query endpoint this client targets.
    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

#[async_trait]
impl ContentSource for StoreClient {
    async fn fetch(&self, query: &str, params: &[QueryParam<'_>]) -> Result<serde_json::Value> {
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), query.to_string())];
        for (name, value) in params {
            // Parameters are JSON-encoded, so slugs are bound as values and
            // never spliced into the query text.
            pairs.push(((*name).to_string(), serde_json::to_string(value)?));
        }

        let mut request = self.http.get(&self.query_url).query(&pairs);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %self.query_url, "Querying content store");

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Query(format!(
                "content store returned HTTP {}",
                status
            )));
        }

        let envelope: QueryResponse = response.json().await?;
        Ok(envelope.result)
    }
}

/// Process-wide handle to the content store
///
/// Cheap to clone; the connected variant shares one HTTP client.
#[derive(Clone)]
pub enum ContentClient {
    /// Configured store, queries go over the wire
    Connected(Arc<dyn ContentSource>),
    /// No project configured; every query resolves empty/absent locally
    Disconnected,
}

impl ContentClient {
    /// Build a client from configuration.
    ///
    /// Absence of a project identifier is a valid operating mode, not an
    /// error: the result is a disconnected client.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        if !config.is_configured() {
            tracing::info!("Content store not configured, running disconnected");
            return Ok(Self::Disconnected);
        }

        let client = StoreClient::new(config)?;
        tracing::info!(
            dataset = %config.dataset,
            url = %client.query_url(),
            "Content store client ready"
        );
        Ok(Self::Connected(Arc::new(client)))
    }

    /// Build a connected client over an arbitrary source.
    pub fn with_source(source: Arc<dyn ContentSource>) -> Self {
        Self::Connected(source)
    }

    /// Whether a store is configured behind this client.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Run a list query. Disconnected clients return an empty vec without
    /// a network call; a connected query that matches nothing returns an
    /// empty vec as well.
    pub async fn list<T>(&self, query: &str, params: &[QueryParam<'_>]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let source = match self {
            Self::Connected(source) => source,
            Self::Disconnected => return Ok(Vec::new()),
        };

        let result = source.fetch(query, params).await?;
        if result.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(result)?)
    }

    /// Run a single-entity query. Disconnected clients and no-match
    /// results both yield `None`; only query-time faults are errors.
    pub async fn get_one<T>(&self, query: &str, params: &[QueryParam<'_>]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let source = match self {
            Self::Connected(source) => source,
            Self::Disconnected => return Ok(None),
        };

        let result = source.fetch(query, params).await?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;
    use crate::model::Category;

    #[tokio::test]
    async fn test_disconnected_list_is_empty_without_network() {
        let client = ContentClient::Disconnected;
        let categories: Vec<Category> = client.list("*[_type == \"category\"]", &[]).await.unwrap();
        assert!(categories.is_empty());
    }

    // Disconnected queries never suspend, so a bare block_on suffices.
    #[test]
    fn test_disconnected_get_is_none() {
        let client = ContentClient::Disconnected;
        let page: Option<Category> =
            tokio_test::block_on(client.get_one("...", &[("$slug", "privacy")])).unwrap();
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn test_connected_list_decodes_result() {
        let source = Arc::new(ScriptedSource::ok(serde_json::json!([
            { "_id": "cat-1", "title": "Safety", "slug": "safety" }
        ])));
        let client = ContentClient::with_source(source.clone());

        let categories: Vec<Category> = client.list("q", &[]).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "safety");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_connected_null_result_maps_to_empty_and_absent() {
        let source = Arc::new(ScriptedSource::ok(serde_json::Value::Null));
        let client = ContentClient::with_source(source);

        let list: Vec<Category> = client.list("q", &[]).await.unwrap();
        assert!(list.is_empty());

        let one: Option<Category> = client.get_one("q", &[]).await.unwrap();
        assert!(one.is_none());
    }

    #[tokio::test]
    async fn test_connected_fault_surfaces() {
        let source = Arc::new(ScriptedSource::failing("boom"));
        let client = ContentClient::with_source(source);

        let result: Result<Vec<Category>> = client.list("q", &[]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_result_is_an_error() {
        let source = Arc::new(ScriptedSource::ok(serde_json::json!({ "not": "a list" })));
        let client = ContentClient::with_source(source);

        let result: Result<Vec<Category>> = client.list("q", &[]).await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_base_url_override_without_project_stays_disconnected() {
        let config = StoreConfig {
            base_url: Some("http://localhost:3333".to_string()),
            ..Default::default()
        };
        let client = ContentClient::from_config(&config).unwrap();
        assert!(!client.is_connected());
    }

    #[test]
    fn test_query_url_shape() {
        let config = StoreConfig {
            project_id: Some("abc123".to_string()),
            dataset: "marketing".to_string(),
            ..Default::default()
        };
        let client = StoreClient::new(&config).unwrap();
        assert_eq!(
            client.query_url(),
            "https://abc123.api.foremancontent.io/v2024-01-01/data/query/marketing"
        );
    }

    #[test]
    fn test_envelope_decodes_without_result_field() {
        let envelope: QueryResponse = serde_json::from_str(r#"{"ms": 3}"#).unwrap();
        assert!(envelope.result.is_null());
    }
}

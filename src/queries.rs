//! Query contracts against the content store
//!
//! One operation per (entity type, access pattern). Each operation owns a
//! static projection string: the exact fields it requests, the expansion
//! depth of every reference, and the ordering rule. Listing pages depend on
//! these orderings, so they live in the query text rather than in caller
//! code. References are always expanded in the projection itself; there is
//! no second fetch to resolve a foreign key.
//!
//! Slugs are bound as the `$slug` parameter, never interpolated into the
//! query string.

use crate::client::ContentClient;
use crate::error::Result;
use crate::model::{
    Agent, AgentSummary, Category, Connector, ConnectorSummary, Guide, GuideSummary, Page,
};

pub(crate) const LIST_AGENTS: &str = r#"*[_type == "agent"] | order(_createdAt desc){
  _id, title, "slug": slug.current, summary, status, _createdAt,
  category->{_id, title, "slug": slug.current, description}
}"#;

pub(crate) const GET_AGENT_BY_SLUG: &str = r#"*[_type == "agent" && slug.current == $slug][0]{
  _id, title, "slug": slug.current, summary, description, status,
  jobToBeDone, inputs, outputs, _createdAt, body,
  category->{_id, title, "slug": slug.current, description},
  connectors[]->{_id, title, "slug": slug.current, summary, logo}
}"#;

pub(crate) const LIST_AGENTS_BY_CATEGORY: &str =
    r#"*[_type == "agent" && category->slug.current == $slug] | order(_createdAt desc){
  _id, title, "slug": slug.current, summary, status, _createdAt,
  category->{_id, title, "slug": slug.current, description}
}"#;

pub(crate) const LIST_CONNECTORS: &str = r#"*[_type == "connector"] | order(title asc){
  _id, title, "slug": slug.current, summary, logo
}"#;

pub(crate) const GET_CONNECTOR_BY_SLUG: &str =
    r#"*[_type == "connector" && slug.current == $slug][0]{
  _id, title, "slug": slug.current, summary, description, logo, body,
  agents[]->{
    _id, title, "slug": slug.current, summary, status, _createdAt,
    category->{_id, title, "slug": slug.current, description}
  },
  setupSteps[]{title, description},
  dataEndpoints[]{name, description}
}"#;

pub(crate) const LIST_GUIDES: &str = r#"*[_type == "guide"] | order(publishedAt desc){
  _id, title, "slug": slug.current, excerpt, author, publishedAt,
  category->{_id, title, "slug": slug.current, description}
}"#;

pub(crate) const GET_GUIDE_BY_SLUG: &str = r#"*[_type == "guide" && slug.current == $slug][0]{
  _id, title, "slug": slug.current, excerpt, author, publishedAt, body,
  category->{_id, title, "slug": slug.current, description},
  agents[]->{
    _id, title, "slug": slug.current, summary, status, _createdAt,
    category->{_id, title, "slug": slug.current, description}
  },
  connectors[]->{_id, title, "slug": slug.current, summary, logo}
}"#;

pub(crate) const LIST_CATEGORIES: &str = r#"*[_type == "category"] | order(title asc){
  _id, title, "slug": slug.current, description
}"#;

pub(crate) const GET_PAGE_BY_SLUG: &str = r#"*[_type == "page" && slug.current == $slug][0]{
  _id, title, "slug": slug.current, body
}"#;

impl ContentClient {
    /// All agents, newest first, with their category expanded.
    pub async fn list_agents(&self) -> Result<Vec<AgentSummary>> {
        self.list(LIST_AGENTS, &[]).await
    }

    /// One agent by slug with expanded connectors and body, or `None`.
    pub async fn get_agent_by_slug(&self, slug: &str) -> Result<Option<Agent>> {
        self.get_one(GET_AGENT_BY_SLUG, &[("$slug", slug)]).await
    }

    /// Agents whose expanded category carries the given slug, newest first.
    pub async fn list_agents_by_category(&self, category_slug: &str) -> Result<Vec<AgentSummary>> {
        self.list(LIST_AGENTS_BY_CATEGORY, &[("$slug", category_slug)])
            .await
    }

    /// All connectors, alphabetical by title.
    pub async fn list_connectors(&self) -> Result<Vec<ConnectorSummary>> {
        self.list(LIST_CONNECTORS, &[]).await
    }

    /// One connector by slug with expanded agents, setup metadata, and
    /// body, or `None`.
    pub async fn get_connector_by_slug(&self, slug: &str) -> Result<Option<Connector>> {
        self.get_one(GET_CONNECTOR_BY_SLUG, &[("$slug", slug)]).await
    }

    /// All guides, most recently published first.
    pub async fn list_guides(&self) -> Result<Vec<GuideSummary>> {
        self.list(LIST_GUIDES, &[]).await
    }

    /// One guide by slug with expanded agents/connectors and body, or
    /// `None`.
    pub async fn get_guide_by_slug(&self, slug: &str) -> Result<Option<Guide>> {
        self.get_one(GET_GUIDE_BY_SLUG, &[("$slug", slug)]).await
    }

    /// All categories, alphabetical by title.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list(LIST_CATEGORIES, &[]).await
    }

    /// One standalone page by slug, or `None`.
    pub async fn get_page_by_slug(&self, slug: &str) -> Result<Option<Page>> {
        self.get_one(GET_PAGE_BY_SLUG, &[("$slug", slug)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedSource;
    use std::sync::Arc;

    #[test]
    fn test_list_orderings_are_declared_in_query_text() {
        assert!(LIST_AGENTS.contains("order(_createdAt desc)"));
        assert!(LIST_AGENTS_BY_CATEGORY.contains("order(_createdAt desc)"));
        assert!(LIST_CONNECTORS.contains("order(title asc)"));
        assert!(LIST_CATEGORIES.contains("order(title asc)"));
        assert!(LIST_GUIDES.contains("order(publishedAt desc)"));
    }

    #[test]
    fn test_slug_queries_bind_the_parameter() {
        for query in [
            GET_AGENT_BY_SLUG,
            LIST_AGENTS_BY_CATEGORY,
            GET_CONNECTOR_BY_SLUG,
            GET_GUIDE_BY_SLUG,
            GET_PAGE_BY_SLUG,
        ] {
            assert!(query.contains("$slug"), "missing $slug in: {}", query);
        }
    }

    #[test]
    fn test_single_entity_queries_take_first_match() {
        for query in [
            GET_AGENT_BY_SLUG,
            GET_CONNECTOR_BY_SLUG,
            GET_GUIDE_BY_SLUG,
            GET_PAGE_BY_SLUG,
        ] {
            assert!(query.contains("[0]"), "not a single-entity query: {}", query);
        }
    }

    #[tokio::test]
    async fn test_disconnected_listings_resolve_empty() {
        let client = ContentClient::Disconnected;
        assert!(client.list_agents().await.unwrap().is_empty());
        assert!(client.list_connectors().await.unwrap().is_empty());
        assert!(client.list_guides().await.unwrap().is_empty());
        assert!(client.list_categories().await.unwrap().is_empty());
        assert!(client.get_page_by_slug("privacy").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_connector_by_slug_decodes_match() {
        let source = Arc::new(ScriptedSource::ok(serde_json::json!({
            "_id": "conn-procore",
            "title": "Procore",
            "slug": "procore",
            "summary": "Construction project management platform",
            "description": "Sync RFIs, submittals, and daily logs into agents.",
            "setupSteps": [{ "title": "Create an API key" }],
            "dataEndpoints": [{ "name": "rfis" }]
        })));
        let client = ContentClient::with_source(source);

        let connector = client.get_connector_by_slug("procore").await.unwrap();
        let connector = connector.expect("connector should match");
        assert_eq!(connector.title, "Procore");
        assert_eq!(connector.setup_steps.len(), 1);
        assert_eq!(connector.data_endpoints[0].name, "rfis");
    }

    #[tokio::test]
    async fn test_get_agent_by_slug_no_match_is_none() {
        let source = Arc::new(ScriptedSource::ok(serde_json::Value::Null));
        let client = ContentClient::with_source(source);

        let agent = client.get_agent_by_slug("does-not-exist").await.unwrap();
        assert!(agent.is_none());
    }

    #[tokio::test]
    async fn test_idempotent_get_with_stable_store() {
        let source = Arc::new(ScriptedSource::ok(serde_json::json!({
            "_id": "page-privacy",
            "title": "Privacy Policy",
            "slug": "privacy-policy"
        })));
        let client = ContentClient::with_source(source);

        let first = client.get_page_by_slug("privacy-policy").await.unwrap();
        let second = client.get_page_by_slug("privacy-policy").await.unwrap();
        assert_eq!(first, second);
    }
}

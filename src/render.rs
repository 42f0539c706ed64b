//! Page-scope composition
//!
//! Mirrors how a page render consumes this layer: fan out the queries the
//! page needs concurrently, resolve each through the fallback policy
//! independently, fan in. The queries are independent reads with no shared
//! mutable state, so one fault never poisons a sibling.

use crate::client::ContentClient;
use crate::fallback;
use crate::model::{AgentSummary, Category, ConnectorSummary, GuideSummary};
use serde::Serialize;

/// Everything the site overview needs, post-fallback: always renderable.
#[derive(Debug, Clone, Serialize)]
pub struct SiteSnapshot {
    pub agents: Vec<AgentSummary>,
    pub connectors: Vec<ConnectorSummary>,
    pub guides: Vec<GuideSummary>,
    pub categories: Vec<Category>,
}

/// Fetch the overview listings concurrently and apply the fallback policy
/// to each result independently.
pub async fn snapshot(client: &ContentClient) -> SiteSnapshot {
    let (agents, connectors, guides, categories) = tokio::join!(
        client.list_agents(),
        client.list_connectors(),
        client.list_guides(),
        client.list_categories(),
    );

    SiteSnapshot {
        agents: fallback::agents(agents),
        connectors: fallback::connectors(connectors),
        guides: fallback::guides(guides),
        categories: fallback::categories(categories),
    }
}

impl SiteSnapshot {
    /// Terse terminal rendering for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Agents ({})\n", self.agents.len()));
        for agent in &self.agents {
            let category = agent
                .category
                .as_ref()
                .map(|c| c.title.as_str())
                .unwrap_or("uncategorized");
            out.push_str(&format!(
                "  {:<28} [{}] {}\n",
                agent.slug,
                category,
                agent.status.as_str()
            ));
        }

        out.push_str(&format!("\nConnectors ({})\n", self.connectors.len()));
        for connector in &self.connectors {
            out.push_str(&format!("  {:<28} {}\n", connector.slug, connector.title));
        }

        out.push_str(&format!("\nGuides ({})\n", self.guides.len()));
        for guide in &self.guides {
            out.push_str(&format!(
                "  {:<28} {} ({})\n",
                guide.slug,
                guide.title,
                guide.published_at.format("%Y-%m-%d")
            ));
        }

        out.push_str(&format!("\nCategories ({})\n", self.categories.len()));
        for category in &self.categories {
            out.push_str(&format!("  {:<28} {}\n", category.slug, category.title));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::ScriptedSource;
    use crate::placeholder;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_disconnected_snapshot_is_fully_placeholder() {
        let snapshot = snapshot(&ContentClient::Disconnected).await;
        assert_eq!(snapshot.agents, placeholder::agents());
        assert_eq!(snapshot.connectors, placeholder::connectors());
        assert_eq!(snapshot.guides, placeholder::guides());
        assert_eq!(snapshot.categories, placeholder::categories());
    }

    #[tokio::test]
    async fn test_faulting_store_still_renders() {
        let source = Arc::new(ScriptedSource::failing("store down"));
        let client = ContentClient::with_source(source.clone());

        let snapshot = snapshot(&client).await;
        assert_eq!(source.calls(), 4);
        assert!(!snapshot.agents.is_empty());

        let text = snapshot.to_text();
        assert!(text.contains("procore"));
        assert!(text.contains("Agents"));
    }

    #[tokio::test]
    async fn test_snapshot_serializes() {
        let snapshot = snapshot(&ContentClient::Disconnected).await;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"agents\""));
    }
}

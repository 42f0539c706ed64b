//! Content entity types
//!
//! Every type here mirrors one query projection from the content store, so
//! the serde contract doubles as the shape contract: live responses and
//! bundled placeholder records both pass through these definitions. Wire
//! field names follow the store's conventions (`_id`, `_createdAt`,
//! `publishedAt`, slug flattened to a plain string); reference fields are
//! always expanded sub-objects, never bare identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Agent lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentStatus {
    /// Available to customers today
    Live,
    /// Announced but not yet released
    ComingSoon,
}

impl AgentStatus {
    /// Wire-format label for the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::ComingSoon => "coming-soon",
        }
    }
}

/// Topic category referenced by agents and guides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Agent listing projection (expanded category, no body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Short one-line description shown on listing cards
    pub summary: String,
    pub status: AgentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Full agent detail projection (expanded connectors, rich-content body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    /// Long-form description shown on the detail page
    pub description: String,
    pub status: AgentStatus,
    #[serde(
        rename = "jobToBeDone",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub job_to_be_done: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub connectors: Vec<ConnectorSummary>,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    /// Opaque rich-content payload, rendered elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Opaque image asset reference, carried through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub serde_json::Value);

/// Connector listing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
}

/// One ordered step of a connector setup flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupStep {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A data endpoint the connector exposes to agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEndpoint {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full connector detail projection (expanded agents, setup metadata, body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub agents: Vec<AgentSummary>,
    #[serde(rename = "setupSteps", default)]
    pub setup_steps: Vec<SetupStep>,
    #[serde(rename = "dataEndpoints", default)]
    pub data_endpoints: Vec<DataEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Guide listing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Full guide detail projection (expanded agents/connectors, body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub agents: Vec<AgentSummary>,
    #[serde(default)]
    pub connectors: Vec<ConnectorSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Standalone legal/informational document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

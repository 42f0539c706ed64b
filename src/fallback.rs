//! Placeholder fallback policy
//!
//! Call-site wrappers that guarantee renderable content regardless of store
//! health. A query fault is downgraded to the placeholder result (logged,
//! never propagated) and an empty or absent live result is substituted the
//! same way. Substitution is all-or-nothing per call site: a listing is
//! either fully live or fully placeholder, never a mix. The one derived-key
//! exception is the by-category listing, which filters the full placeholder
//! set by the requested category slug to keep the filtered-query contract.
//!
//! There is no retry and no backoff; one failed attempt falls straight
//! back. This is an availability trade-off, not a cache.

use crate::error::Result;
use crate::model::{
    Agent, AgentSummary, Category, Connector, ConnectorSummary, Guide, GuideSummary, Page,
};
use crate::placeholder;

/// Resolve a list query result: downgrade faults, substitute placeholders
/// for empty results.
pub fn list_or<T>(
    label: &str,
    result: Result<Vec<T>>,
    placeholder: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    let live = match result {
        Ok(live) => live,
        Err(e) => {
            tracing::warn!(
                query = label,
                error = %e,
                "Content query failed, serving placeholder content"
            );
            return placeholder();
        }
    };
    if live.is_empty() {
        placeholder()
    } else {
        live
    }
}

/// Resolve a single-entity query result: downgrade faults and absence to
/// the placeholder record.
pub fn get_or<T>(label: &str, result: Result<Option<T>>, placeholder: impl FnOnce() -> T) -> T {
    match result {
        Ok(Some(live)) => live,
        Ok(None) => placeholder(),
        Err(e) => {
            tracing::warn!(
                query = label,
                error = %e,
                "Content query failed, serving placeholder content"
            );
            placeholder()
        }
    }
}

/// Agent listing with placeholder fallback.
pub fn agents(result: Result<Vec<AgentSummary>>) -> Vec<AgentSummary> {
    list_or("list_agents", result, placeholder::agents)
}

/// By-category agent listing; the placeholder set is filtered by the same
/// category slug the live query used.
pub fn agents_by_category(
    result: Result<Vec<AgentSummary>>,
    category_slug: &str,
) -> Vec<AgentSummary> {
    list_or("list_agents_by_category", result, || {
        placeholder::agents_by_category(category_slug)
    })
}

/// Agent detail with placeholder fallback: the placeholder with the same
/// slug when one exists, else the default placeholder agent.
pub fn agent(result: Result<Option<Agent>>, slug: &str) -> Agent {
    get_or("get_agent_by_slug", result, || {
        placeholder::agent(slug).unwrap_or_else(placeholder::default_agent)
    })
}

/// Connector listing with placeholder fallback.
pub fn connectors(result: Result<Vec<ConnectorSummary>>) -> Vec<ConnectorSummary> {
    list_or("list_connectors", result, placeholder::connectors)
}

/// Connector detail with placeholder fallback.
pub fn connector(result: Result<Option<Connector>>, slug: &str) -> Connector {
    get_or("get_connector_by_slug", result, || {
        placeholder::connector(slug).unwrap_or_else(placeholder::default_connector)
    })
}

/// Guide listing with placeholder fallback.
pub fn guides(result: Result<Vec<GuideSummary>>) -> Vec<GuideSummary> {
    list_or("list_guides", result, placeholder::guides)
}

/// Guide detail with placeholder fallback.
pub fn guide(result: Result<Option<Guide>>, slug: &str) -> Guide {
    get_or("get_guide_by_slug", result, || {
        placeholder::guide(slug).unwrap_or_else(placeholder::default_guide)
    })
}

/// Category listing with placeholder fallback.
pub fn categories(result: Result<Vec<Category>>) -> Vec<Category> {
    list_or("list_categories", result, placeholder::categories)
}

/// Page with placeholder fallback.
pub fn page(result: Result<Option<Page>>, slug: &str) -> Page {
    get_or("get_page_by_slug", result, || {
        placeholder::page(slug).unwrap_or_else(placeholder::default_page)
    })
}

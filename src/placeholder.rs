//! Bundled placeholder content
//!
//! Sample records substituted by callers whenever the content store is
//! unreachable or empty, so every page stays renderable. The collections
//! satisfy the same shape contracts as live projections (shared serde
//! types, same reference-expansion depth) and are pre-sorted to the same
//! ordering rules the queries declare: agents newest first, connectors and
//! categories by title, guides most recently published first.

use crate::model::{
    Agent, AgentStatus, AgentSummary, Category, Connector, ConnectorSummary, DataEndpoint, Guide,
    GuideSummary, Page, SetupStep,
};
use chrono::{DateTime, Utc};

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn category(id: &str, title: &str, slug: &str, description: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
    }
}

fn safety() -> Category {
    category(
        "ph-cat-safety",
        "Safety",
        "safety",
        "Hazard detection, inspections, and compliance",
    )
}

fn field_operations() -> Category {
    category(
        "ph-cat-field-ops",
        "Field Operations",
        "field-operations",
        "Daily logs, punch lists, and crew coordination",
    )
}

fn preconstruction() -> Category {
    category(
        "ph-cat-precon",
        "Preconstruction",
        "preconstruction",
        "RFIs, submittals, and document control",
    )
}

fn scheduling() -> Category {
    category(
        "ph-cat-scheduling",
        "Scheduling",
        "scheduling",
        "Lookaheads, sequencing, and delay analysis",
    )
}

/// All placeholder categories, alphabetical by title.
pub fn categories() -> Vec<Category> {
    vec![field_operations(), preconstruction(), safety(), scheduling()]
}

fn summary_of(agent: &Agent) -> AgentSummary {
    AgentSummary {
        id: agent.id.clone(),
        title: agent.title.clone(),
        slug: agent.slug.clone(),
        summary: agent.summary.clone(),
        status: agent.status,
        category: agent.category.clone(),
        created_at: agent.created_at,
    }
}

fn agent_details() -> Vec<Agent> {
    // Ordered newest first, matching the listing contract.
    vec![
        Agent {
            id: "ph-agent-daily-log".to_string(),
            title: "Daily Log Summarizer".to_string(),
            slug: "daily-log-summarizer".to_string(),
            summary: "Turns raw field notes and photos into a clean daily log".to_string(),
            description: "Collects crew notes, photos, weather, and delivery records from \
                          your field tools and drafts the daily log before the \
                          superintendent leaves the trailer."
                .to_string(),
            status: AgentStatus::Live,
            job_to_be_done: Some(
                "Close out every working day with a complete, defensible daily log".to_string(),
            ),
            inputs: vec![
                "Crew notes".to_string(),
                "Jobsite photos".to_string(),
                "Weather feed".to_string(),
            ],
            outputs: vec!["Drafted daily log".to_string(), "Open-issue list".to_string()],
            category: Some(field_operations()),
            connectors: vec![procore_summary(), raken_summary()],
            created_at: ts(1_752_998_400), // 2025-07-20
            body: None,
        },
        Agent {
            id: "ph-agent-safety-inspection".to_string(),
            title: "Safety Inspection Agent".to_string(),
            slug: "safety-inspection".to_string(),
            summary: "Flags jobsite hazards from inspection photos and reports".to_string(),
            description: "Reviews inspection photos and incident reports against your \
                          safety program, flags likely hazards, and drafts corrective \
                          actions for the safety manager to approve."
                .to_string(),
            status: AgentStatus::Live,
            job_to_be_done: Some(
                "Catch hazards before they become recordables".to_string(),
            ),
            inputs: vec![
                "Inspection photos".to_string(),
                "Incident reports".to_string(),
            ],
            outputs: vec![
                "Hazard flags".to_string(),
                "Draft corrective actions".to_string(),
            ],
            category: Some(safety()),
            connectors: vec![procore_summary(), fieldwire_summary()],
            created_at: ts(1_749_974_400), // 2025-06-15
            body: None,
        },
        Agent {
            id: "ph-agent-rfi-triage".to_string(),
            title: "RFI Triage Agent".to_string(),
            slug: "rfi-triage".to_string(),
            summary: "Routes incoming RFIs to the right reviewer with context attached".to_string(),
            description: "Reads each incoming RFI, pulls the relevant drawings and spec \
                          sections, and routes it to the right reviewer with a suggested \
                          response attached."
                .to_string(),
            status: AgentStatus::Live,
            job_to_be_done: Some("Cut RFI turnaround from days to hours".to_string()),
            inputs: vec!["RFIs".to_string(), "Drawings".to_string(), "Specs".to_string()],
            outputs: vec![
                "Routed RFIs".to_string(),
                "Suggested responses".to_string(),
            ],
            category: Some(preconstruction()),
            connectors: vec![autodesk_summary(), procore_summary()],
            created_at: ts(1_746_864_000), // 2025-05-10
            body: None,
        },
        Agent {
            id: "ph-agent-submittal-review".to_string(),
            title: "Submittal Review Agent".to_string(),
            slug: "submittal-review".to_string(),
            summary: "Pre-checks submittals against spec sections before review".to_string(),
            description: "Compares each submittal package against the governing spec \
                          section and highlights deviations so reviewers start from a \
                          marked-up draft instead of a blank page."
                .to_string(),
            status: AgentStatus::ComingSoon,
            job_to_be_done: Some(
                "Stop spec deviations from slipping through submittal review".to_string(),
            ),
            inputs: vec!["Submittal packages".to_string(), "Spec sections".to_string()],
            outputs: vec!["Deviation report".to_string()],
            category: Some(preconstruction()),
            connectors: vec![autodesk_summary()],
            created_at: ts(1_743_465_600), // 2025-04-01
            body: None,
        },
        Agent {
            id: "ph-agent-lookahead".to_string(),
            title: "Lookahead Schedule Agent".to_string(),
            slug: "lookahead-schedule".to_string(),
            summary: "Drafts three-week lookaheads from the master schedule and field status"
                .to_string(),
            description: "Reads the master schedule and current field status, drafts the \
                          three-week lookahead, and calls out trades at risk of stacking."
                .to_string(),
            status: AgentStatus::ComingSoon,
            job_to_be_done: Some(
                "Keep the lookahead current without a planner rebuilding it weekly".to_string(),
            ),
            inputs: vec!["Master schedule".to_string(), "Field status".to_string()],
            outputs: vec!["Three-week lookahead".to_string()],
            category: Some(scheduling()),
            connectors: vec![procore_summary()],
            created_at: ts(1_741_132_800), // 2025-03-05
            body: None,
        },
    ]
}

/// All placeholder agents, newest first.
pub fn agents() -> Vec<AgentSummary> {
    agent_details().iter().map(summary_of).collect()
}

/// Placeholder agents in the given category, newest first.
pub fn agents_by_category(category_slug: &str) -> Vec<AgentSummary> {
    agents()
        .into_iter()
        .filter(|agent| {
            agent
                .category
                .as_ref()
                .map(|c| c.slug == category_slug)
                .unwrap_or(false)
        })
        .collect()
}

/// One placeholder agent by slug.
pub fn agent(slug: &str) -> Option<Agent> {
    agent_details().into_iter().find(|a| a.slug == slug)
}

/// The default placeholder agent, used when no slug matches.
pub fn default_agent() -> Agent {
    agent_details().remove(0)
}

fn procore_summary() -> ConnectorSummary {
    ConnectorSummary {
        id: "ph-conn-procore".to_string(),
        title: "Procore".to_string(),
        slug: "procore".to_string(),
        summary: "Construction project management platform".to_string(),
        logo: None,
    }
}

fn autodesk_summary() -> ConnectorSummary {
    ConnectorSummary {
        id: "ph-conn-acc".to_string(),
        title: "Autodesk Construction Cloud".to_string(),
        slug: "autodesk-construction-cloud".to_string(),
        summary: "Design and construction document management".to_string(),
        logo: None,
    }
}

fn fieldwire_summary() -> ConnectorSummary {
    ConnectorSummary {
        id: "ph-conn-fieldwire".to_string(),
        title: "Fieldwire".to_string(),
        slug: "fieldwire".to_string(),
        summary: "Field task management and plan viewing".to_string(),
        logo: None,
    }
}

fn raken_summary() -> ConnectorSummary {
    ConnectorSummary {
        id: "ph-conn-raken".to_string(),
        title: "Raken".to_string(),
        slug: "raken".to_string(),
        summary: "Daily reporting and field productivity tracking".to_string(),
        logo: None,
    }
}

fn connector_details() -> Vec<Connector> {
    // Ordered by title, matching the listing contract.
    vec![
        Connector {
            id: "ph-conn-acc".to_string(),
            title: "Autodesk Construction Cloud".to_string(),
            slug: "autodesk-construction-cloud".to_string(),
            summary: "Design and construction document management".to_string(),
            description: "Gives agents read access to sheets, models, and issues so \
                          document-heavy work like RFI and submittal review starts from \
                          the current set."
                .to_string(),
            logo: None,
            agents: agents_by_category("preconstruction"),
            setup_steps: vec![
                SetupStep {
                    title: "Create an OAuth app in your ACC account".to_string(),
                    description: Some(
                        "Scopes: data:read on the projects your agents cover".to_string(),
                    ),
                },
                SetupStep {
                    title: "Paste the client credentials into Foreman".to_string(),
                    description: None,
                },
            ],
            data_endpoints: vec![
                DataEndpoint {
                    name: "sheets".to_string(),
                    description: Some("Current drawing set".to_string()),
                },
                DataEndpoint {
                    name: "issues".to_string(),
                    description: Some("Open design and field issues".to_string()),
                },
            ],
            body: None,
        },
        Connector {
            id: "ph-conn-fieldwire".to_string(),
            title: "Fieldwire".to_string(),
            slug: "fieldwire".to_string(),
            summary: "Field task management and plan viewing".to_string(),
            description: "Feeds field tasks and punch items to agents and lets them file \
                          follow-ups where the crews already work."
                .to_string(),
            logo: None,
            agents: agents_by_category("safety"),
            setup_steps: vec![SetupStep {
                title: "Generate an API token from your Fieldwire profile".to_string(),
                description: None,
            }],
            data_endpoints: vec![DataEndpoint {
                name: "tasks".to_string(),
                description: Some("Field tasks and punch items".to_string()),
            }],
            body: None,
        },
        Connector {
            id: "ph-conn-procore".to_string(),
            title: "Procore".to_string(),
            slug: "procore".to_string(),
            summary: "Construction project management platform".to_string(),
            description: "The deepest integration: RFIs, submittals, daily logs, and \
                          inspections flow both ways between Procore and your agents."
                .to_string(),
            logo: None,
            agents: agents(),
            setup_steps: vec![
                SetupStep {
                    title: "Install the Foreman app from the Procore marketplace".to_string(),
                    description: None,
                },
                SetupStep {
                    title: "Select the projects your agents may read".to_string(),
                    description: Some("Per-project permissions apply".to_string()),
                },
            ],
            data_endpoints: vec![
                DataEndpoint {
                    name: "rfis".to_string(),
                    description: Some("Open and answered RFIs".to_string()),
                },
                DataEndpoint {
                    name: "daily-logs".to_string(),
                    description: Some("Daily log entries".to_string()),
                },
                DataEndpoint {
                    name: "inspections".to_string(),
                    description: Some("Inspection checklists and results".to_string()),
                },
            ],
            body: None,
        },
        Connector {
            id: "ph-conn-raken".to_string(),
            title: "Raken".to_string(),
            slug: "raken".to_string(),
            summary: "Daily reporting and field productivity tracking".to_string(),
            description: "Supplies crew notes and time entries so daily-log agents work \
                          from what the field actually reported."
                .to_string(),
            logo: None,
            agents: agents_by_category("field-operations"),
            setup_steps: vec![SetupStep {
                title: "Connect Raken with your company API key".to_string(),
                description: None,
            }],
            data_endpoints: vec![DataEndpoint {
                name: "work-logs".to_string(),
                description: Some("Crew notes and time entries".to_string()),
            }],
            body: None,
        },
    ]
}

/// All placeholder connectors, alphabetical by title.
pub fn connectors() -> Vec<ConnectorSummary> {
    connector_details()
        .iter()
        .map(|c| ConnectorSummary {
            id: c.id.clone(),
            title: c.title.clone(),
            slug: c.slug.clone(),
            summary: c.summary.clone(),
            logo: c.logo.clone(),
        })
        .collect()
}

/// One placeholder connector by slug.
pub fn connector(slug: &str) -> Option<Connector> {
    connector_details().into_iter().find(|c| c.slug == slug)
}

/// The default placeholder connector, used when no slug matches.
pub fn default_connector() -> Connector {
    connector_details().remove(0)
}

fn guide_details() -> Vec<Guide> {
    // Ordered most recently published first, matching the listing contract.
    vec![
        Guide {
            id: "ph-guide-rollout".to_string(),
            title: "Rolling Out AI Agents Across Your Jobsites".to_string(),
            slug: "rolling-out-ai-agents".to_string(),
            excerpt: "A phased rollout plan that starts with one trade on one project"
                .to_string(),
            author: "Dana Ruiz".to_string(),
            published_at: ts(1_753_689_600), // 2025-07-28
            category: Some(field_operations()),
            agents: vec![agents()[0].clone()],
            connectors: vec![procore_summary()],
            body: None,
        },
        Guide {
            id: "ph-guide-jobsite".to_string(),
            title: "AI on the Jobsite: Where Agents Fit".to_string(),
            slug: "ai-on-the-jobsite".to_string(),
            excerpt: "Which field workflows benefit from agents today, and which do not"
                .to_string(),
            author: "Marcus Webb".to_string(),
            published_at: ts(1_751_356_800), // 2025-07-01
            category: Some(safety()),
            agents: agents_by_category("safety"),
            connectors: vec![],
            body: None,
        },
        Guide {
            id: "ph-guide-procore".to_string(),
            title: "Connecting Procore to Your First Agent".to_string(),
            slug: "connecting-procore".to_string(),
            excerpt: "A fifteen-minute walkthrough from marketplace install to first sync"
                .to_string(),
            author: "Dana Ruiz".to_string(),
            published_at: ts(1_748_822_400), // 2025-06-02
            category: Some(preconstruction()),
            agents: vec![],
            connectors: vec![procore_summary()],
            body: None,
        },
    ]
}

/// All placeholder guides, most recently published first.
pub fn guides() -> Vec<GuideSummary> {
    guide_details()
        .iter()
        .map(|g| GuideSummary {
            id: g.id.clone(),
            title: g.title.clone(),
            slug: g.slug.clone(),
            excerpt: g.excerpt.clone(),
            author: g.author.clone(),
            published_at: g.published_at,
            category: g.category.clone(),
        })
        .collect()
}

/// One placeholder guide by slug.
pub fn guide(slug: &str) -> Option<Guide> {
    guide_details().into_iter().find(|g| g.slug == slug)
}

/// The default placeholder guide, used when no slug matches.
pub fn default_guide() -> Guide {
    guide_details().remove(0)
}

fn page_details() -> Vec<Page> {
    vec![
        Page {
            id: "ph-page-privacy".to_string(),
            title: "Privacy Policy".to_string(),
            slug: "privacy-policy".to_string(),
            body: Some(placeholder_body("Our privacy policy is being finalized.")),
        },
        Page {
            id: "ph-page-terms".to_string(),
            title: "Terms of Service".to_string(),
            slug: "terms-of-service".to_string(),
            body: Some(placeholder_body("Our terms of service are being finalized.")),
        },
        Page {
            id: "ph-page-contact".to_string(),
            title: "Contact".to_string(),
            slug: "contact".to_string(),
            body: Some(placeholder_body("Reach the Foreman team at hello@foreman.build.")),
        },
    ]
}

fn placeholder_body(text: &str) -> serde_json::Value {
    serde_json::json!([{
        "_type": "block",
        "style": "normal",
        "children": [{ "_type": "span", "text": text }]
    }])
}

/// One placeholder page by slug.
pub fn page(slug: &str) -> Option<Page> {
    page_details().into_iter().find(|p| p.slug == slug)
}

/// The default placeholder page, used when no slug matches.
pub fn default_page() -> Page {
    page_details().remove(0)
}

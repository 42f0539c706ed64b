//! foreman-content - Content retrieval layer for the Foreman marketing site
//!
//! Foreman is an AI-agent product for the construction industry. Its
//! marketing site renders agent listings, connector listings, guides, and
//! legal pages from a headless content store; this crate is the typed
//! retrieval layer between the two, including the graceful-degradation
//! policy that keeps every page renderable when the store is unreachable,
//! unconfigured, or empty.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Page rendering                        │
//! │   overview · agent detail · connector detail · guides     │
//! └───────────────┬──────────────────────────────────────────┘
//!                 │ post-fallback values, always renderable
//! ┌───────────────▼──────────────────────────────────────────┐
//! │  fallback  - downgrade faults, substitute placeholders    │
//! ├───────────────────────────────────────────────────────────┤
//! │  queries   - nine contracts, static projections, fixed    │
//! │              orderings, $slug parameter binding           │
//! ├───────────────────────────────────────────────────────────┤
//! │  client    - Connected(HTTP reader) | Disconnected        │
//! └───────────────┬──────────────────────────────────────────┘
//!                 │ read-only projection queries
//!          ┌──────▼───────┐        ┌──────────────────┐
//!          │ content store │        │ placeholder data │
//!          │ (remote)      │        │ (bundled)        │
//!          └──────────────┘        └──────────────────┘
//! ```
//!
//! ## Operating modes
//!
//! - **Connected**: a project identifier is configured; queries go over
//!   the wire. Query-time faults surface as [`Error`] and are downgraded
//!   by the [`fallback`] wrappers at each call site.
//! - **Disconnected**: no project configured. Every list query resolves to
//!   an empty vec and every get to `None`, locally and immediately; the
//!   fallback wrappers then substitute placeholder content.
//!
//! ## Modules
//!
//! - [`config`]: store configuration from environment and TOML
//! - [`client`]: store client, the connected/disconnected capability
//! - [`model`]: entity types shared by live projections and placeholders
//! - [`queries`]: the named query contracts
//! - [`placeholder`]: bundled sample content, shape-identical to live data
//! - [`fallback`]: the substitution policy
//! - [`render`]: page-scope fan-out and terminal rendering

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod placeholder;
pub mod queries;
pub mod render;

pub use client::{ContentClient, ContentSource};
pub use config::StoreConfig;
pub use error::{Error, Result};

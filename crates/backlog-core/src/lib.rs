//! # backlog-core
//!
//! Typed client for the Backlog REST API (v2).
//!
//! Endpoint-specific optional parameters are built as typed options, checked
//! against the operation's whitelist and their own domain rules, and only
//! then written into the query string or form body. Every request passes
//! through one chokepoint that adds the `apiKey` parameter and sorts the
//! response into success, no content, or a decoded API error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backlog_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> backlog_core::Result<()> {
//!     let client = BacklogClient::new("https://example.backlog.com", "api-key")?;
//!
//!     let o = ActivityOptionService;
//!     let activities = client
//!         .space()
//!         .activity()
//!         .list(&[o.with_query_count(20), o.with_query_order(Order::DESC)])
//!         .await?;
//!
//!     let o = ProjectOptionService;
//!     let project = client
//!         .project()
//!         .update("TEST", &[o.with_form_name("Renamed")])
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Resource services            │  space, project, user, wiki, attachments
//! ├─────────────────────────────────────┤
//! │     Options + validation gate       │  kinds, factories, façades, whitelist
//! ├─────────────────────────────────────┤
//! │   Chokepoint + response classifier  │  apiKey, api/v2 paths, error decoding
//! ├─────────────────────────────────────┤
//! │            Transport                │  Doer trait, reqwest backend
//! └─────────────────────────────────────┘
//! ```

pub use error::BacklogError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use backlog_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::BacklogError;

    pub use crate::api::client::BacklogClient;
    pub use crate::api::models::{Activity, Attachment, Project, User, Wiki};
    pub use crate::api::params::{FormParams, QueryParams};
    pub use crate::api::transport::{Doer, ReqwestDoer};

    pub use crate::core::services::{IssueIdOrKey, ProjectIdOrKey, RepositoryIdOrName};

    pub use crate::option::{
        ActivityOptionService, FormOption, Order, ProjectOptionService, QueryOption, Role,
        TextFormat, UserOptionService, WikiOptionService,
    };

    pub use crate::storage::config::Config;
    pub use crate::storage::credentials::{get_api_key, resolve_api_key};

    pub use crate::display::TableDisplay;
}

/// HTTP layer: parameter containers, the request chokepoint, response
/// classification, transport and data models.
pub mod api;

/// Resource services built on the client.
pub mod core;

/// Terminal table rendering for API models.
pub mod display;

/// Error types. Callers branch on variants, never on message text.
pub mod error;

/// Typed options, their factories and per-resource façades.
pub mod option;

/// Configuration file and API key lookup.
pub mod storage;

/// Validation and text helpers.
pub mod utils;

/// Convenient Result type alias using [`BacklogError`].
pub type Result<T> = std::result::Result<T, BacklogError>;

#[doc(hidden)]
pub use api::client::BacklogClient;
#[doc(hidden)]
pub use storage::config::Config;

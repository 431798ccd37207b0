//! Typed, endpoint-scoped optional parameters.
//!
//! An option pairs a parameter kind with a deferred check and a deferred
//! setter. Resource operations collect options from a façade, pass them
//! through [`apply_options`] with their own whitelist, and only then send the
//! request.
//!
//! ```rust,ignore
//! use backlog_core::option::{ActivityOptionService, Order};
//!
//! let o = ActivityOptionService;
//! let activities = client
//!     .space()
//!     .activity()
//!     .list(&[o.with_query_count(20), o.with_query_order(Order::ASC)])
//!     .await?;
//! ```

pub mod facade;
pub mod factory;
pub mod kind;
pub mod value;

pub use facade::{ActivityOptionService, ProjectOptionService, UserOptionService, WikiOptionService};
pub use factory::{FormOptionService, QueryOptionService};
pub use kind::{FormType, OptionType, Order, QueryType, Role, TextFormat};
pub use value::{FormOption, ParamOption, QueryOption, apply_options};

//! University Management System console navigation.
//!
//! A static catalog of console modules, each gated by the roles allowed to
//! see it, plus the queries the console shell runs against it:
//!
//! - [`Catalog::visible_entries`]: modules a role may see
//! - [`Catalog::resolve`]: entry at an exact path
//! - [`Catalog::breadcrumbs`]: trail for the current path
//! - [`Catalog::can_access`] and [`Catalog::guard`]: access decisions
//!
//! All queries are pure reads of an immutable catalog.

pub mod access;
pub mod breadcrumb;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod permission;
pub mod resolve;
pub mod role;

pub use access::RouteDecision;
pub use breadcrumb::{Breadcrumb, ROOT_LABEL, ROOT_PATH};
pub use catalog::{Catalog, NavigationEntry, Resolved, SubNavigationEntry, university};
pub use config::Config;
pub use error::{CapabilityError, CatalogError, UnknownRole};
pub use permission::{Action, Capability, PermissionConflict, PermissionTable};
pub use resolve::is_active;
pub use role::Role;

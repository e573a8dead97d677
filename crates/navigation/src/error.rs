//! Navigation error types with clear, actionable messages.
//!
//! Catalog errors are configuration defects: they are raised while a
//! catalog is being built or loaded, never while it is being queried.

use thiserror::Error;

/// Errors detected while validating a navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An entry has an empty `id`.
    #[error("entry with path '{path}': empty 'id' field")]
    EmptyId { path: String },

    /// An entry has an empty `label`.
    #[error("entry '{entry}': empty 'label' field")]
    EmptyLabel { entry: String },

    /// Paths must be absolute, non-root, and carry no trailing slash.
    #[error("entry '{entry}': invalid path '{path}' (must start with '/' and not end with '/')")]
    InvalidPath { entry: String, path: String },

    /// A module grants access to nobody.
    #[error("module '{entry}': 'allowedRoles' must not be empty")]
    EmptyAllowedRoles { entry: String },

    /// Module and sub-module ids share one namespace.
    #[error("duplicate entry id '{id}'")]
    DuplicateId { id: String },

    /// Two modules claim the same route prefix.
    #[error("module '{entry}': path '{path}' is already used by module '{existing}'")]
    DuplicateModulePath {
        entry: String,
        path: String,
        existing: String,
    },

    /// A sub-module must live under its parent's path.
    #[error("sub-module '{entry}': path '{path}' is not under parent '{parent}' ({parent_path}/)")]
    SubEntryOutsideParent {
        entry: String,
        path: String,
        parent: String,
        parent_path: String,
    },

    /// Two sub-modules of the same parent share a path.
    #[error("sub-module '{entry}': path '{path}' is already used within module '{parent}'")]
    DuplicateSubEntryPath {
        entry: String,
        path: String,
        parent: String,
    },

    /// A sub-module path collides with a module path.
    #[error("sub-module '{entry}': path '{path}' equals the path of module '{module}'")]
    SubEntryShadowsModule {
        entry: String,
        path: String,
        module: String,
    },
}

/// A role string outside the closed role set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected one of: admin, faculty, staff, student, guest)")]
pub struct UnknownRole(pub String);

/// Errors parsing a `<module>.<action>` capability string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability '{0}': expected '<module>.<action>'")]
    Malformed(String),

    #[error("capability '{capability}': unknown action '{action}' (expected 'read' or 'write')")]
    UnknownAction { capability: String, action: String },
}

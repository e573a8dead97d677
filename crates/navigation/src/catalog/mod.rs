//! Navigation catalog: the static tree of console modules.
//!
//! A catalog is built once (from the built-in table or a catalog document),
//! validated on construction, and read-only afterwards. Callers only ever
//! receive shared references into it.
//!
//! Module and sub-module ids share one namespace so that any entry can be
//! looked up by id.

mod builtin;
mod validate;

use std::collections::HashMap;

use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

pub use builtin::{university, university_modules};

use crate::error::CatalogError;
use crate::role::Role;

/// A top-level console module (e.g. "Student Management").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Stable identifier, unique across the whole catalog.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Route prefix, unique across modules.
    pub path: String,
    /// Roles permitted to see and enter this module. Never empty.
    pub allowed_roles: Vec<Role>,
    /// Child entries, in display order.
    #[serde(default)]
    pub sub_entries: Vec<SubNavigationEntry>,
    /// Cosmetic tag shown next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl NavigationEntry {
    /// Whether `role` is listed in `allowed_roles`. No role is never allowed.
    pub fn allows(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }

    /// Sub-entry whose path equals `path` exactly.
    pub fn sub_entry_at(&self, path: &str) -> Option<&SubNavigationEntry> {
        self.sub_entries.iter().find(|sub| sub.path == path)
    }
}

/// A child of a [`NavigationEntry`]. Carries no roles of its own: it is
/// visible whenever its parent is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNavigationEntry {
    pub id: String,
    pub label: String,
    /// Always starts with the parent's path followed by `/`.
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A catalog entry located by id or path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolved<'a> {
    Module(&'a NavigationEntry),
    SubModule {
        entry: &'a SubNavigationEntry,
        parent: &'a NavigationEntry,
    },
}

impl<'a> Resolved<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            Resolved::Module(module) => &module.id,
            Resolved::SubModule { entry, .. } => &entry.id,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            Resolved::Module(module) => &module.label,
            Resolved::SubModule { entry, .. } => &entry.label,
        }
    }

    pub fn path(&self) -> &'a str {
        match *self {
            Resolved::Module(module) => &module.path,
            Resolved::SubModule { entry, .. } => &entry.path,
        }
    }

    /// The top-level module that owns this entry (itself for modules).
    pub fn module(&self) -> &'a NavigationEntry {
        match *self {
            Resolved::Module(module) => module,
            Resolved::SubModule { parent, .. } => parent,
        }
    }
}

/// Position of an entry inside the module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryLocation {
    Module(usize),
    SubModule { module: usize, sub: usize },
}

/// Validated, immutable navigation catalog.
///
/// Serializes as an ordered array of module records; deserializing runs the
/// same validation as [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<NavigationEntry>")]
pub struct Catalog {
    modules: Vec<NavigationEntry>,
    index: HashMap<String, EntryLocation>,
}

impl Catalog {
    /// Validate `modules` and build the id index.
    ///
    /// Declaration order is kept: it is the display order and the
    /// tie-break for prefix matching.
    pub fn new(modules: Vec<NavigationEntry>) -> Result<Self, CatalogError> {
        let index = validate::validate(&modules)?;

        debug!(
            modules = modules.len(),
            entries = index.len(),
            "navigation catalog validated"
        );

        Ok(Self { modules, index })
    }

    /// All modules in declaration order.
    pub fn modules(&self) -> &[NavigationEntry] {
        &self.modules
    }

    /// Top-level module by id.
    pub fn get(&self, id: &str) -> Option<&NavigationEntry> {
        match self.index.get(id)? {
            EntryLocation::Module(i) => self.modules.get(*i),
            EntryLocation::SubModule { .. } => None,
        }
    }

    /// Any entry (module or sub-module) by id.
    pub fn find(&self, id: &str) -> Option<Resolved<'_>> {
        match *self.index.get(id)? {
            EntryLocation::Module(i) => self.modules.get(i).map(Resolved::Module),
            EntryLocation::SubModule { module, sub } => {
                let parent = self.modules.get(module)?;
                let entry = parent.sub_entries.get(sub)?;
                Some(Resolved::SubModule { entry, parent })
            }
        }
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of entries of both kinds.
    pub fn entry_count(&self) -> usize {
        self.index.len()
    }
}

impl TryFrom<Vec<NavigationEntry>> for Catalog {
    type Error = CatalogError;

    fn try_from(modules: Vec<NavigationEntry>) -> Result<Self, Self::Error> {
        Self::new(modules)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.modules)
    }
}

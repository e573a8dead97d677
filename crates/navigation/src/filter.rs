//! Role filter: which modules a role may see.

use crate::catalog::{Catalog, NavigationEntry};
use crate::role::Role;

impl Catalog {
    /// Modules whose `allowed_roles` contain `role`, in declaration order.
    ///
    /// Sub-entries are not filtered separately; they come with their parent.
    /// No role yields no navigation at all.
    pub fn visible_entries(&self, role: impl Into<Option<Role>>) -> Vec<&NavigationEntry> {
        let role = role.into();
        self.modules()
            .iter()
            .filter(|module| module.allows(role))
            .collect()
    }
}

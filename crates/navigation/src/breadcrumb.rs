//! Breadcrumb trails derived from the current path.

use serde::Serialize;

use crate::catalog::Catalog;

/// Label of the crumb every trail starts with.
pub const ROOT_LABEL: &str = "Dashboard";

/// Path of the crumb every trail starts with; also the landing page.
pub const ROOT_PATH: &str = "/dashboard";

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// The fixed first crumb.
    pub fn root() -> Self {
        Self::new(ROOT_LABEL, ROOT_PATH)
    }
}

impl Catalog {
    /// Trail of at most three crumbs: root, module, sub-module.
    ///
    /// The module is the first one in declaration order whose path is a
    /// string prefix of `path`. The sub-module crumb is only added on an
    /// exact sub-entry match. Never empty.
    ///
    /// A module declared at [`ROOT_PATH`] still gets its own crumb for
    /// paths beneath it, so `/dashboard/x` yields the root crumb twice.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Breadcrumb> {
        let mut trail = vec![Breadcrumb::root()];
        if path == ROOT_PATH {
            return trail;
        }

        let Some(module) = self.modules().iter().find(|m| path.starts_with(&m.path)) else {
            return trail;
        };
        trail.push(Breadcrumb::new(&module.label, &module.path));

        if let Some(sub) = module.sub_entry_at(path) {
            trail.push(Breadcrumb::new(&sub.label, &sub.path));
        }

        trail
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::{NavigationEntry, university};
    use crate::role::Role;

    #[test]
    fn root_path_is_a_single_crumb() {
        assert_eq!(university().breadcrumbs("/dashboard"), vec![Breadcrumb::root()]);
    }

    #[test]
    fn sub_module_path_has_three_crumbs() {
        assert_eq!(
            university().breadcrumbs("/academics/courses"),
            vec![
                Breadcrumb::new("Dashboard", "/dashboard"),
                Breadcrumb::new("Academic Management", "/academics"),
                Breadcrumb::new("Course Management", "/academics/courses"),
            ]
        );
    }

    #[test]
    fn module_path_has_two_crumbs() {
        let trail = university().breadcrumbs("/financial");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1], Breadcrumb::new("Financial Management", "/financial"));
    }

    #[test]
    fn unknown_sub_path_stops_at_module() {
        let trail = university().breadcrumbs("/settings/backup/2024-01-01");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].path, "/settings");
    }

    #[test]
    fn path_below_root_module_repeats_root_crumb() {
        assert_eq!(
            university().breadcrumbs("/dashboard/x"),
            vec![Breadcrumb::root(), Breadcrumb::new("Dashboard", "/dashboard")]
        );
    }

    #[test]
    fn unknown_path_is_root_only() {
        assert_eq!(university().breadcrumbs("/login"), vec![Breadcrumb::root()]);
    }

    #[test]
    fn first_declared_prefix_wins() {
        let module = |id: &str, path: &str| NavigationEntry {
            id: id.to_string(),
            label: id.to_string(),
            path: path.to_string(),
            allowed_roles: vec![Role::Admin],
            sub_entries: vec![],
            badge: None,
        };
        let catalog = Catalog::new(vec![
            module("reports", "/reports"),
            module("reports-archive", "/reports/archive"),
        ])
        .unwrap();

        let trail = catalog.breadcrumbs("/reports/archive");
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].label, "reports");
    }
}

//! Access checks and the route guard.

use serde::Serialize;
use tracing::debug;

use crate::breadcrumb::ROOT_PATH;
use crate::catalog::{Catalog, Resolved};
use crate::role::Role;

/// Outcome of guarding a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RouteDecision<'a> {
    /// The path is in the catalog and the role may enter it.
    Allow { entry: Resolved<'a> },
    /// The path is in the catalog but its module excludes the role.
    Forbidden {
        module_id: &'a str,
        redirect: &'static str,
    },
    /// The path is not in the catalog.
    NotFound { redirect: &'static str },
}

impl RouteDecision<'_> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow { .. })
    }
}

impl Catalog {
    /// Whether `role` may reach the module with id `entry_id`.
    ///
    /// Only top-level ids are considered; unknown ids and an absent role
    /// grant nothing.
    pub fn can_access(&self, entry_id: &str, role: impl Into<Option<Role>>) -> bool {
        self.get(entry_id)
            .is_some_and(|module| module.allows(role.into()))
    }

    /// Decide whether a request for `path` may proceed.
    ///
    /// Resolution is exact; a path merely beneath a module is not found.
    pub fn guard(&self, path: &str, role: impl Into<Option<Role>>) -> RouteDecision<'_> {
        let role = role.into();

        let Some(entry) = self.resolve(path) else {
            debug!(path, "no catalog entry for path");
            return RouteDecision::NotFound { redirect: ROOT_PATH };
        };

        let module = entry.module();
        if module.allows(role) {
            RouteDecision::Allow { entry }
        } else {
            debug!(
                path,
                module = %module.id,
                role = role.map(Role::as_str).unwrap_or("none"),
                "navigation denied"
            );
            RouteDecision::Forbidden {
                module_id: &module.id,
                redirect: ROOT_PATH,
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::university;

    #[test]
    fn financial_is_admin_only() {
        let catalog = university();
        assert!(catalog.can_access("financial", Role::Admin));
        assert!(!catalog.can_access("financial", Role::Faculty));
    }

    #[test]
    fn unknown_ids_and_sub_ids_are_denied() {
        let catalog = university();
        assert!(!catalog.can_access("registrar", Role::Admin));
        assert!(!catalog.can_access("student-list", Role::Admin));
    }

    #[test]
    fn absent_role_is_denied() {
        assert!(!university().can_access("dashboard", None));
    }

    #[test]
    fn guard_allows_sub_module_of_visible_module() {
        let decision = university().guard("/academics/grading", Role::Student);
        match decision {
            RouteDecision::Allow { entry } => assert_eq!(entry.id(), "academic-grading"),
            other => panic!("expected allow, got {other:?}"),
        }
    }

    #[test]
    fn guard_forbids_hidden_module() {
        assert_eq!(
            university().guard("/security/audit", Role::Faculty),
            RouteDecision::Forbidden {
                module_id: "security",
                redirect: "/dashboard"
            }
        );
    }

    #[test]
    fn guard_uses_exact_resolution() {
        let decision = university().guard("/students/list/42", Role::Admin);
        assert_eq!(decision, RouteDecision::NotFound { redirect: "/dashboard" });
        assert!(!decision.is_allowed());
    }
}

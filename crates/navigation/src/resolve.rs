//! Path resolution and active-module highlighting.
//!
//! [`Catalog::resolve`] is exact and is what authorization builds on.
//! [`is_active`] is a looser prefix test meant only for highlighting the
//! current module in navigation.

use crate::catalog::{Catalog, NavigationEntry, Resolved};

impl Catalog {
    /// Map a request path to the entry declared at exactly that path.
    ///
    /// Module paths are checked first, then sub-entries of every module in
    /// declaration order. `None` means the path is not in the catalog; the
    /// caller picks the fallback.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_>> {
        if let Some(module) = self.modules().iter().find(|m| m.path == path) {
            return Some(Resolved::Module(module));
        }

        self.modules().iter().find_map(|parent| {
            parent
                .sub_entry_at(path)
                .map(|entry| Resolved::SubModule { entry, parent })
        })
    }

    /// First module (declaration order) that `path` is inside of.
    pub fn active_module(&self, path: &str) -> Option<&NavigationEntry> {
        self.modules().iter().find(|m| is_active(m, path))
    }
}

/// Whether `path` is the module's path or lies beneath it.
pub fn is_active(entry: &NavigationEntry, path: &str) -> bool {
    path.strip_prefix(entry.path.as_str())
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::university;

    #[test]
    fn resolves_every_module_to_itself() {
        let catalog = university();
        for module in catalog.modules() {
            assert_eq!(catalog.resolve(&module.path), Some(Resolved::Module(module)));
        }
    }

    #[test]
    fn resolves_sub_entry_with_parent() {
        let resolved = university().resolve("/students/list").unwrap();
        match resolved {
            Resolved::SubModule { entry, parent } => {
                assert_eq!(entry.id, "student-list");
                assert_eq!(parent.id, "students");
            }
            Resolved::Module(_) => panic!("expected a sub-module"),
        }
    }

    #[test]
    fn unknown_and_near_miss_paths_are_not_found() {
        let catalog = university();
        for path in ["/nowhere", "/students/", "/students/list/42", "students", ""] {
            assert!(catalog.resolve(path).is_none(), "{path:?} should not resolve");
        }
    }

    #[test]
    fn active_check_is_segment_aware() {
        let students = university().get("students").unwrap();
        assert!(is_active(students, "/students"));
        assert!(is_active(students, "/students/list"));
        assert!(is_active(students, "/students/list/42"));
        assert!(!is_active(students, "/studentsx"));
        assert!(!is_active(students, "/"));
    }

    #[test]
    fn active_module_for_deep_path() {
        let catalog = university();
        assert_eq!(catalog.active_module("/financial/fees/2024").unwrap().id, "financial");
        assert!(catalog.active_module("/login").is_none());
    }
}

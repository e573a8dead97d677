//! Granular capabilities (`students.write`, `academics.read`, ...).
//!
//! Navigation visibility is decided by a module's `allowed_roles`. The
//! capability table answers finer questions inside a module ("may this role
//! edit grades?") and must never grant anything on a module the role cannot
//! see; [`PermissionTable::audit`] reports every place where it does.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::catalog::Catalog;
use crate::error::CapabilityError;
use crate::role::Role;

/// What a capability lets a role do inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
        }
    }
}

/// A `<module>.<action>` capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability {
    module: String,
    action: Action,
}

impl Capability {
    pub fn new(module: impl Into<String>, action: Action) -> Self {
        Self {
            module: module.into(),
            action,
        }
    }

    /// Id of the catalog module this capability applies to.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.action.as_str())
    }
}

impl FromStr for Capability {
    type Err = CapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((module, action)) = s.rsplit_once('.') else {
            return Err(CapabilityError::Malformed(s.to_string()));
        };

        if module.is_empty() {
            return Err(CapabilityError::Malformed(s.to_string()));
        }

        let action = match action {
            "read" => Action::Read,
            "write" => Action::Write,
            other => {
                return Err(CapabilityError::UnknownAction {
                    capability: s.to_string(),
                    action: other.to_string(),
                });
            }
        };

        Ok(Self::new(module, action))
    }
}

impl Serialize for Capability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A capability that contradicts the navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PermissionConflict {
    /// The capability names a module the catalog does not have.
    UnknownModule { role: Role, capability: Capability },
    /// The role holds a capability on a module hidden from it.
    HiddenModule { role: Role, capability: Capability },
}

impl fmt::Display for PermissionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionConflict::UnknownModule { role, capability } => {
                write!(f, "role '{role}' holds '{capability}' on an unknown module")
            }
            PermissionConflict::HiddenModule { role, capability } => write!(
                f,
                "role '{role}' holds '{capability}' but cannot see module '{}'",
                capability.module()
            ),
        }
    }
}

/// Role → capability grants. `admin` implicitly holds every capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    grants: BTreeMap<Role, BTreeSet<Capability>>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(role, "<module>.<action>")` pairs.
    pub fn from_grants<'a>(
        grants: impl IntoIterator<Item = (Role, &'a str)>,
    ) -> Result<Self, CapabilityError> {
        let mut table = Self::new();
        for (role, capability) in grants {
            table.grant(role, capability.parse()?);
        }
        Ok(table)
    }

    /// The built-in grants matching [`crate::catalog::university`].
    pub fn university() -> Self {
        use Action::{Read, Write};

        let grants: &[(Role, &str, Action)] = &[
            (Role::Faculty, "students", Read),
            (Role::Faculty, "academics", Read),
            (Role::Faculty, "academics", Write),
            (Role::Faculty, "schedule", Read),
            (Role::Staff, "students", Read),
            (Role::Staff, "students", Write),
            (Role::Staff, "faculty", Read),
            (Role::Staff, "faculty", Write),
            (Role::Staff, "infrastructure", Read),
            (Role::Staff, "infrastructure", Write),
            (Role::Student, "academics", Read),
            (Role::Student, "schedule", Read),
        ];

        let mut table = Self::new();
        for (role, module, action) in grants {
            table.grant(*role, Capability::new(*module, *action));
        }
        table
    }

    pub fn grant(&mut self, role: Role, capability: Capability) {
        self.grants.entry(role).or_default().insert(capability);
    }

    /// Whether `role` holds `capability`. No role holds nothing.
    pub fn has_permission(&self, role: impl Into<Option<Role>>, capability: &Capability) -> bool {
        match role.into() {
            None => false,
            Some(Role::Admin) => true,
            Some(role) => self
                .grants
                .get(&role)
                .is_some_and(|caps| caps.contains(capability)),
        }
    }

    /// Capabilities explicitly granted to `role`.
    pub fn capabilities(&self, role: Role) -> impl Iterator<Item = &Capability> {
        self.grants.get(&role).into_iter().flatten()
    }

    /// Every grant that the catalog's navigation gate contradicts.
    pub fn audit(&self, catalog: &Catalog) -> Vec<PermissionConflict> {
        let mut conflicts = Vec::new();

        for (role, capabilities) in &self.grants {
            for capability in capabilities {
                let conflict = match catalog.get(capability.module()) {
                    None => PermissionConflict::UnknownModule {
                        role: *role,
                        capability: capability.clone(),
                    },
                    Some(module) if !module.allows(Some(*role)) => {
                        PermissionConflict::HiddenModule {
                            role: *role,
                            capability: capability.clone(),
                        }
                    }
                    Some(_) => continue,
                };

                warn!(%conflict, "capability conflicts with navigation catalog");
                conflicts.push(conflict);
            }
        }

        conflicts
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::university;

    #[test]
    fn parse_capability() {
        let cap: Capability = "students.write".parse().unwrap();
        assert_eq!(cap.module(), "students");
        assert_eq!(cap.action(), Action::Write);
        assert_eq!(cap.to_string(), "students.write");
    }

    #[test]
    fn reject_malformed_capability() {
        assert!(matches!(
            "students".parse::<Capability>(),
            Err(CapabilityError::Malformed(_))
        ));
        assert!(matches!(
            ".read".parse::<Capability>(),
            Err(CapabilityError::Malformed(_))
        ));
        assert!(matches!(
            "students.delete".parse::<Capability>(),
            Err(CapabilityError::UnknownAction { .. })
        ));
    }

    #[test]
    fn admin_holds_everything() {
        let table = PermissionTable::new();
        let cap = Capability::new("financial", Action::Write);
        assert!(table.has_permission(Role::Admin, &cap));
        assert!(!table.has_permission(Role::Staff, &cap));
        assert!(!table.has_permission(None, &cap));
    }

    #[test]
    fn built_in_grants() {
        let table = PermissionTable::university();
        let write_grades = Capability::new("academics", Action::Write);
        assert!(table.has_permission(Role::Faculty, &write_grades));
        assert!(!table.has_permission(Role::Student, &write_grades));
        assert_eq!(table.capabilities(Role::Guest).count(), 0);
    }

    #[test]
    fn built_in_table_audits_clean() {
        assert!(PermissionTable::university().audit(university()).is_empty());
    }

    #[test]
    fn audit_flags_hidden_and_unknown_modules() {
        let table = PermissionTable::from_grants([
            (Role::Student, "financial.read"),
            (Role::Student, "library.read"),
            (Role::Student, "schedule.read"),
        ])
        .unwrap();

        let conflicts = table.audit(university());
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.contains(&PermissionConflict::HiddenModule {
            role: Role::Student,
            capability: Capability::new("financial", Action::Read),
        }));
        assert!(conflicts.contains(&PermissionConflict::UnknownModule {
            role: Role::Student,
            capability: Capability::new("library", Action::Read),
        }));
    }
}

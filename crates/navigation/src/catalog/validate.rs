//! Load-time catalog validation.
//!
//! Every structural defect is rejected here so that queries never have to
//! handle a malformed catalog. The first defect found (in declaration
//! order) is reported.

use std::collections::{HashMap, HashSet};

use super::{EntryLocation, NavigationEntry};
use crate::error::CatalogError;

/// Validate `modules` and return the id index.
pub(super) fn validate(
    modules: &[NavigationEntry],
) -> Result<HashMap<String, EntryLocation>, CatalogError> {
    let mut index = HashMap::new();
    let mut module_paths: HashMap<&str, &str> = HashMap::new();

    for (i, module) in modules.iter().enumerate() {
        check_fields(&module.id, &module.label, &module.path)?;

        if module.allowed_roles.is_empty() {
            return Err(CatalogError::EmptyAllowedRoles {
                entry: module.id.clone(),
            });
        }

        insert_id(&mut index, &module.id, EntryLocation::Module(i))?;

        if let Some(existing) = module_paths.insert(&module.path, &module.id) {
            return Err(CatalogError::DuplicateModulePath {
                entry: module.id.clone(),
                path: module.path.clone(),
                existing: existing.to_string(),
            });
        }
    }

    // Sub-entries are checked after all module paths are known so that a
    // sub-entry cannot shadow a module declared later.
    for (i, module) in modules.iter().enumerate() {
        let prefix = format!("{}/", module.path);
        let mut sub_paths = HashSet::new();

        for (j, sub) in module.sub_entries.iter().enumerate() {
            check_fields(&sub.id, &sub.label, &sub.path)?;

            if !sub.path.starts_with(&prefix) {
                return Err(CatalogError::SubEntryOutsideParent {
                    entry: sub.id.clone(),
                    path: sub.path.clone(),
                    parent: module.id.clone(),
                    parent_path: module.path.clone(),
                });
            }

            if !sub_paths.insert(sub.path.as_str()) {
                return Err(CatalogError::DuplicateSubEntryPath {
                    entry: sub.id.clone(),
                    path: sub.path.clone(),
                    parent: module.id.clone(),
                });
            }

            if let Some(owner) = module_paths.get(sub.path.as_str()) {
                return Err(CatalogError::SubEntryShadowsModule {
                    entry: sub.id.clone(),
                    path: sub.path.clone(),
                    module: (*owner).to_string(),
                });
            }

            insert_id(
                &mut index,
                &sub.id,
                EntryLocation::SubModule { module: i, sub: j },
            )?;
        }
    }

    Ok(index)
}

fn check_fields(id: &str, label: &str, path: &str) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::EmptyId {
            path: path.to_string(),
        });
    }

    if label.trim().is_empty() {
        return Err(CatalogError::EmptyLabel {
            entry: id.to_string(),
        });
    }

    if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
        return Err(CatalogError::InvalidPath {
            entry: id.to_string(),
            path: path.to_string(),
        });
    }

    Ok(())
}

fn insert_id(
    index: &mut HashMap<String, EntryLocation>,
    id: &str,
    location: EntryLocation,
) -> Result<(), CatalogError> {
    if index.insert(id.to_string(), location).is_some() {
        return Err(CatalogError::DuplicateId { id: id.to_string() });
    }
    Ok(())
}

#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common helpers for integration tests.
//!
//! Catalogs are built through the real loader so tests exercise the same
//! validation path as a deployed console.

#![allow(dead_code)]

use std::path::PathBuf;

use ums_navigation::loader::{self, Format};
use ums_navigation::{Catalog, Role};
use ums_test_utils::TestModule;

/// Parse fixture modules through the JSON loader.
pub fn catalog_from(modules: &[TestModule]) -> Catalog {
    loader::parse_str(&ums_test_utils::json_document(modules), Format::Json)
        .expect("fixture catalog should be valid")
}

/// Roles plus the absent role, for exhaustive property checks.
pub fn all_roles() -> Vec<Option<Role>> {
    std::iter::once(None)
        .chain(Role::ALL.into_iter().map(Some))
        .collect()
}

/// A file path under the system temp dir unique to this test process.
pub fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ums-nav-{}-{name}", std::process::id()))
}

//! Catalog documents on disk.
//!
//! A catalog document is an ordered list of module records using the field
//! names `id`, `label`, `path`, `allowedRoles`, `subEntries`, `badge` and
//! `description`. The format follows the file extension:
//!
//! - `.json`: a top-level array
//! - `.yaml` / `.yml`: a top-level sequence
//! - `.toml`: an array of tables named `modules`
//!
//! Every document is validated while loading, so a malformed catalog is
//! rejected at startup rather than at navigation time.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, NavigationEntry};

/// Catalog documents larger than this (1 MiB) are refused without reading.
const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024;

/// TOML cannot express a top-level array, so modules live under a key.
#[derive(Deserialize)]
struct TomlDocument {
    #[serde(default)]
    modules: Vec<NavigationEntry>,
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Load and validate a catalog document.
pub fn load(path: &Path) -> Result<Catalog> {
    let Some(format) = Format::from_path(path) else {
        bail!(
            "unsupported catalog format for {} (expected .json, .toml, .yaml or .yml)",
            path.display()
        );
    };

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to stat catalog file: {}", path.display()))?;
    if metadata.len() > MAX_CATALOG_FILE_SIZE {
        bail!(
            "catalog file {} is {} bytes, larger than the {MAX_CATALOG_FILE_SIZE} byte limit",
            path.display(),
            metadata.len()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    let catalog = parse_str(&content, format)
        .with_context(|| format!("invalid catalog file: {}", path.display()))?;

    info!(
        path = %path.display(),
        modules = catalog.len(),
        entries = catalog.entry_count(),
        "loaded navigation catalog"
    );

    Ok(catalog)
}

/// Parse and validate a catalog document held in memory.
pub fn parse_str(content: &str, format: Format) -> Result<Catalog> {
    let modules: Vec<NavigationEntry> = match format {
        Format::Json => serde_json::from_str(content).context("failed to parse catalog JSON")?,
        Format::Yaml => serde_yml::from_str(content).context("failed to parse catalog YAML")?,
        Format::Toml => {
            let doc: TomlDocument =
                toml::from_str(content).context("failed to parse catalog TOML")?;
            doc.modules
        }
    };

    debug!(?format, modules = modules.len(), "parsed catalog document");

    Ok(Catalog::new(modules)?)
}

/// Load `path` if given, otherwise fall back to the built-in catalog.
pub fn load_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load(path),
        None => {
            debug!("using built-in university catalog");
            Ok(crate::catalog::university().clone())
        }
    }
}

/// Render a catalog as a pretty-printed JSON document.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("failed to serialize catalog")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::role::Role;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("nav.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("nav.TOML")), Some(Format::Toml));
        assert_eq!(Format::from_path(Path::new("nav.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("nav.ini")), None);
        assert_eq!(Format::from_path(Path::new("nav")), None);
    }

    #[test]
    fn parse_toml_document() {
        let toml = r#"
[[modules]]
id = "dashboard"
label = "Dashboard"
path = "/dashboard"
allowedRoles = ["admin", "student"]

[[modules]]
id = "library"
label = "Library"
path = "/library"
allowedRoles = ["student"]
badge = "Beta"

[[modules.subEntries]]
id = "library-loans"
label = "Loans"
path = "/library/loans"
description = "Borrowed items"
"#;

        let catalog = parse_str(toml, Format::Toml).unwrap();
        assert_eq!(catalog.len(), 2);
        let library = catalog.get("library").unwrap();
        assert_eq!(library.allowed_roles, vec![Role::Student]);
        assert_eq!(library.badge.as_deref(), Some("Beta"));
        assert_eq!(library.sub_entries[0].id, "library-loans");
    }

    #[test]
    fn parse_yaml_document() {
        let yaml = r#"
- id: dashboard
  label: Dashboard
  path: /dashboard
  allowedRoles: [admin]
  subEntries:
    - id: dashboard-kpis
      label: KPIs
      path: /dashboard/kpis
"#;

        let catalog = parse_str(yaml, Format::Yaml).unwrap();
        assert!(catalog.find("dashboard-kpis").is_some());
    }

    #[test]
    fn unknown_role_in_document_is_rejected() {
        let json = r#"[{"id": "a", "label": "A", "path": "/a", "allowedRoles": ["registrar"]}]"#;
        assert!(parse_str(json, Format::Json).is_err());
    }

    #[test]
    fn document_roles_are_case_insensitive() {
        let json =
            r#"[{"id": "a", "label": "A", "path": "/a", "allowedRoles": ["Admin", "STUDENT"]}]"#;
        let catalog = parse_str(json, Format::Json).unwrap();
        assert_eq!(
            catalog.get("a").unwrap().allowed_roles,
            vec![Role::Admin, Role::Student]
        );

        let toml = r#"
[[modules]]
id = "a"
label = "A"
path = "/a"
allowedRoles = ["Faculty"]
"#;
        let catalog = parse_str(toml, Format::Toml).unwrap();
        assert!(catalog.can_access("a", Role::Faculty));
    }

    #[test]
    fn oversized_file_is_refused() {
        let path = std::env::temp_dir()
            .join(format!("ums-nav-{}-oversized.json", std::process::id()));
        let size = usize::try_from(MAX_CATALOG_FILE_SIZE).unwrap() + 1;
        std::fs::write(&path, vec![b' '; size]).unwrap();

        let err = load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        let message = format!("{err:#}");
        assert!(message.contains("1048577 bytes"), "{message}");
        assert!(message.contains("1048576 byte limit"), "{message}");
    }

    #[test]
    fn validation_error_is_preserved() {
        let json = r#"[
            {"id": "a", "label": "A", "path": "/a", "allowedRoles": ["admin"]},
            {"id": "a", "label": "B", "path": "/b", "allowedRoles": ["admin"]}
        ]"#;
        let err = parse_str(json, Format::Json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::DuplicateId { id: "a".to_string() })
        );
    }

    #[test]
    fn json_export_parses_back() {
        let json = to_json(crate::catalog::university()).unwrap();
        let catalog = parse_str(&json, Format::Json).unwrap();
        assert_eq!(&catalog, crate::catalog::university());
    }

    #[test]
    fn builtin_when_no_path() {
        let catalog = load_or_builtin(None).unwrap();
        assert_eq!(catalog.len(), crate::catalog::university().len());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/catalog.json"));
    }
}

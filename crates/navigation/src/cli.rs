//! Command implementations for the `ums-nav` binary.
//!
//! Each command writes its result to the given writer, either as an
//! aligned text table or, with `json`, as a single JSON document.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::access::RouteDecision;
use crate::catalog::{Catalog, Resolved};
use crate::loader;
use crate::permission::PermissionTable;
use crate::role::Role;

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn role_name(role: Option<Role>) -> &'static str {
    role.map(Role::as_str).unwrap_or("none")
}

/// List the modules (and their sub-modules) visible to `role`.
pub fn cmd_visible(
    catalog: &Catalog,
    role: Option<Role>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let visible = catalog.visible_entries(role);

    if json {
        return write_json(out, &visible);
    }

    if visible.is_empty() {
        writeln!(out, "No navigation visible to role '{}'.", role_name(role))?;
        return Ok(());
    }

    writeln!(out, "{:<28} {:<32} {:<32}", "ID", "LABEL", "PATH")?;
    writeln!(out, "{}", "-".repeat(92))?;
    for module in visible {
        writeln!(out, "{:<28} {:<32} {}", module.id, module.label, module.path)?;
        for sub in &module.sub_entries {
            writeln!(out, "  {:<26} {:<32} {}", sub.id, sub.label, sub.path)?;
        }
    }

    Ok(())
}

/// Show the catalog entry at exactly `path`.
pub fn cmd_resolve(catalog: &Catalog, path: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let resolved = catalog.resolve(path);

    if json {
        return write_json(out, &resolved);
    }

    match resolved {
        None => writeln!(out, "{path}: not found")?,
        Some(Resolved::Module(module)) => {
            writeln!(out, "{path}: module '{}' ({})", module.id, module.label)?;
        }
        Some(Resolved::SubModule { entry, parent }) => writeln!(
            out,
            "{path}: sub-module '{}' ({}) of module '{}' ({})",
            entry.id, entry.label, parent.id, parent.label
        )?,
    }

    Ok(())
}

/// Print the breadcrumb trail for `path`.
pub fn cmd_breadcrumbs(
    catalog: &Catalog,
    path: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let trail = catalog.breadcrumbs(path);

    if json {
        return write_json(out, &trail);
    }

    let line = trail
        .iter()
        .map(|crumb| format!("{} ({})", crumb.label, crumb.path))
        .collect::<Vec<_>>()
        .join(" > ");
    writeln!(out, "{line}")?;

    Ok(())
}

#[derive(Serialize)]
struct AccessReport<'a> {
    id: &'a str,
    role: Option<Role>,
    allowed: bool,
}

/// Report whether `role` may reach module `id`.
pub fn cmd_can_access(
    catalog: &Catalog,
    id: &str,
    role: Option<Role>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let allowed = catalog.can_access(id, role);

    if json {
        return write_json(out, &AccessReport { id, role, allowed });
    }

    let verdict = if allowed { "allowed" } else { "denied" };
    writeln!(out, "{id}: {verdict} for role '{}'", role_name(role))?;

    Ok(())
}

/// Run the route guard for `path` and `role`.
pub fn cmd_guard(
    catalog: &Catalog,
    path: &str,
    role: Option<Role>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let decision = catalog.guard(path, role);

    if json {
        return write_json(out, &decision);
    }

    match decision {
        RouteDecision::Allow { entry } => {
            writeln!(out, "{path}: allow ({} '{}')", entry.module().id, entry.id())?;
        }
        RouteDecision::Forbidden {
            module_id,
            redirect,
        } => writeln!(
            out,
            "{path}: forbidden for role '{}' (module '{module_id}'), redirect to {redirect}",
            role_name(role)
        )?,
        RouteDecision::NotFound { redirect } => {
            writeln!(out, "{path}: not found, redirect to {redirect}")?;
        }
    }

    Ok(())
}

/// Summarize a catalog that passed validation.
pub fn cmd_validate(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Catalog OK: {} modules, {} entries.",
        catalog.len(),
        catalog.entry_count()
    )?;

    for role in Role::ALL {
        let visible = catalog.visible_entries(role).len();
        writeln!(out, "  {:<10} {visible} visible modules", role.as_str())?;
    }

    Ok(())
}

/// Write the catalog as a JSON document.
pub fn cmd_export(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", loader::to_json(catalog)?)?;
    Ok(())
}

/// Check capability grants against the catalog. Returns the conflict count.
pub fn cmd_audit(
    catalog: &Catalog,
    table: &PermissionTable,
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let conflicts = table.audit(catalog);

    if json {
        write_json(out, &conflicts)?;
        return Ok(conflicts.len());
    }

    if conflicts.is_empty() {
        writeln!(out, "No capability conflicts.")?;
    }
    for conflict in &conflicts {
        writeln!(out, "{conflict}")?;
    }

    Ok(conflicts.len())
}

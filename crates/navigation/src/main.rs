//! `ums-nav`: inspect and check the console navigation catalog.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ums_navigation::{Config, PermissionTable, Role, cli, loader};

/// Console navigation tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog document to use instead of the built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List modules visible to a role.
    Visible {
        #[arg(long)]
        role: Option<Role>,
    },
    /// Show the entry declared at a path.
    Resolve { path: String },
    /// Show the breadcrumb trail for a path.
    Breadcrumbs { path: String },
    /// Check whether a role may reach a module.
    CanAccess {
        id: String,
        #[arg(long)]
        role: Option<Role>,
    },
    /// Decide whether a navigation request may proceed.
    Guard {
        path: String,
        #[arg(long)]
        role: Option<Role>,
    },
    /// Validate the catalog and summarize it.
    Validate,
    /// Print the catalog as a JSON document.
    Export,
    /// Check the capability table against the catalog.
    Audit,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let catalog_path = args.catalog.or(config.catalog_path);
    let catalog = loader::load_or_builtin(catalog_path.as_deref())?;

    let role = |explicit: Option<Role>| explicit.or(config.default_role);
    let json = args.json;
    let mut out = io::stdout().lock();

    match args.command {
        Command::Visible { role: r } => cli::cmd_visible(&catalog, role(r), json, &mut out)?,
        Command::Resolve { path } => cli::cmd_resolve(&catalog, &path, json, &mut out)?,
        Command::Breadcrumbs { path } => cli::cmd_breadcrumbs(&catalog, &path, json, &mut out)?,
        Command::CanAccess { id, role: r } => {
            cli::cmd_can_access(&catalog, &id, role(r), json, &mut out)?;
        }
        Command::Guard { path, role: r } => {
            cli::cmd_guard(&catalog, &path, role(r), json, &mut out)?;
        }
        Command::Validate => cli::cmd_validate(&catalog, &mut out)?,
        Command::Export => cli::cmd_export(&catalog, &mut out)?,
        Command::Audit => {
            let conflicts =
                cli::cmd_audit(&catalog, &PermissionTable::university(), json, &mut out)?;
            if conflicts > 0 {
                bail!("{conflicts} capability conflict(s) found");
            }
            info!("capability table is consistent with the catalog");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

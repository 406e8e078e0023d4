//! # Init Subcommand
//!
//! Emits a fresh project document: no assets, no tracks, export settings
//! unset. Written to stdout unless `--out` is given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use onlycut_core::{ProjectConfig, Timestamp};

/// Arguments for the `onlycut init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project display name.
    #[arg(long)]
    pub name: String,

    /// Editor version recorded in the document.
    #[arg(long = "editor-version", default_value = env!("CARGO_PKG_VERSION"))]
    pub editor_version: String,

    /// Creation time (RFC 3339, `Z` suffix). Defaults to now.
    #[arg(long)]
    pub created_at: Option<String>,

    /// Write to this file instead of stdout. Refuses to overwrite.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Build the document described by `args`.
pub fn build_project(args: &InitArgs) -> Result<ProjectConfig> {
    let now = match &args.created_at {
        Some(raw) => Timestamp::parse(raw)?,
        None => Timestamp::now(),
    };
    Ok(ProjectConfig::new_at(&args.name, &args.editor_version, now)?)
}

/// Execute the init subcommand. Returns exit code 0 on success.
pub fn run_init(args: &InitArgs) -> Result<u8> {
    let project = build_project(args)?;
    let text = serde_json::to_string_pretty(&project)?;

    match &args.out {
        Some(path) => {
            if path.exists() {
                anyhow::bail!("refusing to overwrite existing file {}", path.display());
            }
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote project document");
        }
        None => println!("{text}"),
    }

    Ok(0)
}

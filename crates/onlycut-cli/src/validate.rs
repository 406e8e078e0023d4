//! # Validate Subcommand
//!
//! Checks project documents on disk against the project schema. Each file
//! is read, decoded and validated independently; one bad file does not
//! stop the others from being checked.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use onlycut_core::{ProjectConfig, ProjectError};

/// Arguments for the `onlycut validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project documents (`project-config.json`) to check.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Also print the expected shape for rejected documents.
    #[arg(long)]
    pub explain: bool,
}

/// Outcome of validating one file.
#[derive(Debug)]
pub enum FileReport {
    /// The document matched the schema.
    Valid {
        /// Number of leaf assets in the tree.
        assets: usize,
        /// Number of timeline tracks.
        tracks: usize,
    },
    /// The document was read but rejected.
    Invalid(ProjectError),
}

/// Read and validate one project document.
///
/// # Errors
///
/// Only for I/O failures; a rejected document is a [`FileReport::Invalid`].
pub fn validate_file(path: &Path) -> Result<FileReport> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    Ok(match ProjectConfig::from_json_slice(&bytes) {
        Ok(project) => FileReport::Valid {
            assets: project.all_assets().len(),
            tracks: project.timeline.tracks.len(),
        },
        Err(err) => FileReport::Invalid(err),
    })
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if every document is valid, 1 if any was rejected,
/// 2 if any file could not be read. Every path is checked either way.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut failed = 0usize;
    let mut errored = 0usize;

    for path in &args.paths {
        tracing::debug!(path = %path.display(), "validating project document");

        let report = match validate_file(path) {
            Ok(report) => report,
            Err(e) => {
                errored += 1;
                tracing::error!(path = %path.display(), "{e:#}");
                println!("ERROR {}: {e:#}", path.display());
                continue;
            }
        };

        match report {
            FileReport::Valid { assets, tracks } => {
                println!("OK   {} ({assets} assets, {tracks} tracks)", path.display());
            }
            FileReport::Invalid(err) => {
                failed += 1;
                println!("FAIL {}: {err}", path.display());
                if let Some(schema_err) = err.schema_error().filter(|_| args.explain) {
                    println!("     {schema_err}");
                }
            }
        }
    }

    let total = args.paths.len();
    if failed > 0 {
        println!("\n{failed} of {total} document(s) rejected.");
    }
    if errored > 0 {
        println!("{errored} of {total} file(s) could not be read.");
        Ok(2)
    } else if failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

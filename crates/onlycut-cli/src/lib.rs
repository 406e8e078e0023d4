//! # onlycut-cli — Project File Tooling
//!
//! Command-line access to the project-configuration layer, for checking
//! documents on disk and scaffolding new ones outside the editor.
//!
//! ## Subcommands
//!
//! - `validate` — check one or more `project-config.json` files
//! - `init` — emit a fresh project document
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation logic lives in `onlycut-core`.
//! - Exit codes: 0 success, 1 rejected document, 2 operational error.

pub mod init;
pub mod validate;

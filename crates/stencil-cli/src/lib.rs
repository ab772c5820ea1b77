// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! Stencil CLI library.
//!
//! This crate provides the command-line interface for the stencil layout
//! template core: browsing a catalog, previewing templates against a
//! property set, and remembering the selected template in a local SQLite
//! store.
//!
//! # Usage
//!
//! This crate is primarily used through the `stencil` binary:
//!
//! ```bash
//! stencil list                      # Catalog, selection marked
//! stencil apply header-centered -m mobile
//! stencil select header-split       # Apply and remember
//! stencil current                   # Remembered template
//! stencil reset                     # Back to "Minimal"
//! stencil --region footer list
//! ```
//!
//! # Configuration
//!
//! Projects are configured via `stencil.toml` at the project root.

/// CLI commands (list, show, apply, select, reset, current, clear).
pub mod commands;
/// Project configuration from `stencil.toml`.
pub mod config;
/// Key-Value store with SQLite backend.
pub mod kv;
/// Catalog and session opened for one invocation.
pub mod workspace;

use commands::Command;
use config::Config;
use std::io::Write;
use stencil::regions::{FooterProps, HeaderProps};
use stencil::Region;
use workspace::Workspace;

/// Opens the workspace for `region` and runs `command`, using the typed
/// property set of that region.
pub fn execute<W: Write>(
    config: &Config,
    region: Region,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match region {
        Region::Header => {
            let workspace = Workspace::<HeaderProps>::open(config, region)?;
            commands::run(&workspace, command, out)
        }
        Region::Footer => {
            let workspace = Workspace::<FooterProps>::open(config, region)?;
            commands::run(&workspace, command, out)
        }
    }
}

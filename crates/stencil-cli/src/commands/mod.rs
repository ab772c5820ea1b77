// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! This module contains the implementations for all stencil CLI commands:
//!
//! - `list`, `categories`, `show`: browse the catalog
//! - `apply`, `select`, `reset`: apply a template (and remember it)
//! - `current`, `clear`: inspect or forget the remembered template

/// Catalog browsing commands.
pub mod browse;
/// Template application commands.
pub mod apply;
/// Selection inspection commands.
pub mod selection;

use crate::workspace::Workspace;
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use stencil::{DeviceMode, PropertySet};

/// A stencil subcommand.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List templates, marking the selected one
    List {
        /// Only show templates in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List template categories
    Categories,
    /// Show a template as JSON
    Show {
        /// Template id
        id: String,
    },
    /// Preview a template applied to a property set (not remembered)
    Apply {
        /// Template id
        id: String,
        /// What to apply it to
        #[command(flatten)]
        target: Target,
    },
    /// Apply a template and remember it as the selection
    Select {
        /// Template id
        id: String,
        /// What to apply it to
        #[command(flatten)]
        target: Target,
    },
    /// Apply and remember the "Minimal" template
    Reset {
        /// What to apply it to
        #[command(flatten)]
        target: Target,
    },
    /// Show the remembered template
    Current,
    /// Forget the remembered template
    Clear,
}

/// What a template is applied to.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Target {
    /// Device mode: desktop, mobile
    #[arg(short, long, default_value = "desktop")]
    pub mode: DeviceMode,
    /// JSON file with the current property set (region defaults when omitted)
    #[arg(short, long)]
    pub props: Option<PathBuf>,
}

/// Runs `command` against `workspace`, writing human-readable output to `out`.
pub fn run<P, W>(workspace: &Workspace<P>, command: Command, out: &mut W) -> anyhow::Result<()>
where
    P: PropertySet + Default + Serialize + DeserializeOwned,
    W: Write,
{
    match command {
        Command::List { category } => browse::list(workspace, category.as_deref(), out),
        Command::Categories => browse::categories(workspace, out),
        Command::Show { id } => browse::show(workspace, &id, out),
        Command::Apply { id, target } => apply::preview(workspace, &id, &target, out),
        Command::Select { id, target } => apply::select(workspace, &id, &target, out),
        Command::Reset { target } => apply::reset(workspace, &target, out),
        Command::Current => selection::current(workspace, out),
        Command::Clear => selection::clear(workspace, out),
    }
}

// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Template application: `apply`, `select`, `reset`.

use super::Target;
use crate::workspace::Workspace;
use anyhow::Context;
use console::style;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use stencil::{Applied, Picked, PropertySet, TemplateSelector};

/// Prints what applying template `id` would render, without remembering it.
pub fn preview<P, W>(
    workspace: &Workspace<P>,
    id: &str,
    target: &Target,
    out: &mut W,
) -> anyhow::Result<()>
where
    P: PropertySet + Default + Serialize + DeserializeOwned,
    W: Write,
{
    let current = load_props::<P>(target)?;
    let selector = TemplateSelector::new(workspace.catalog(), None, |_: &str| {});
    let Some(applied) = selector.preview(id, &current, target.mode) else {
        anyhow::bail!("Unknown {} template: {}", workspace.region, id);
    };
    print_applied(&applied, out)
}

/// Applies template `id` and remembers it.
pub fn select<P, W>(
    workspace: &Workspace<P>,
    id: &str,
    target: &Target,
    out: &mut W,
) -> anyhow::Result<()>
where
    P: PropertySet + Default + Serialize + DeserializeOwned,
    W: Write,
{
    let current = load_props::<P>(target)?;
    let Some(picked) = workspace.session.pick(id, &current, target.mode) else {
        anyhow::bail!("Unknown {} template: {}", workspace.region, id);
    };
    report_picked(&picked, out)
}

/// Applies and remembers the default template; a no-op without one.
pub fn reset<P, W>(workspace: &Workspace<P>, target: &Target, out: &mut W) -> anyhow::Result<()>
where
    P: PropertySet + Default + Serialize + DeserializeOwned,
    W: Write,
{
    let current = load_props::<P>(target)?;
    let Some(picked) = workspace.session.reset(&current, target.mode) else {
        writeln!(
            out,
            "No default template in the {} catalog, nothing to reset",
            workspace.region
        )?;
        return Ok(());
    };
    report_picked(&picked, out)
}

fn load_props<P: Default + DeserializeOwned>(target: &Target) -> anyhow::Result<P> {
    let Some(path) = &target.props else {
        return Ok(P::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read property set {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid property set {}", path.display()))
}

fn report_picked<P: Serialize, W: Write>(picked: &Picked<P>, out: &mut W) -> anyhow::Result<()> {
    if picked.saved {
        writeln!(out, "{} {}", style("Selected").green().bold(), picked.id)?;
    } else {
        writeln!(
            out,
            "{} {} applied, but the selection could not be saved",
            style("Warning:").yellow().bold(),
            picked.id
        )?;
    }
    print_applied(&picked.applied, out)
}

fn print_applied<P: Serialize, W: Write>(applied: &Applied<P>, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(&applied.props)?)?;
    let css = applied.css_variables();
    if !css.is_empty() {
        writeln!(out)?;
        write!(out, "{}", css)?;
    }
    Ok(())
}

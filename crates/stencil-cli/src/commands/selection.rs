// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Selection inspection: `current`, `clear`.

use crate::workspace::Workspace;
use console::style;
use std::io::Write;

/// Prints the remembered template, if it still exists.
pub fn current<P, W: Write>(workspace: &Workspace<P>, out: &mut W) -> anyhow::Result<()> {
    match workspace.session.restore() {
        Some(template) => writeln!(out, "{} ({})", style(&template.id).bold(), template.name)?,
        None => writeln!(out, "No {} template selected", workspace.region)?,
    }
    Ok(())
}

/// Forgets the remembered template.
pub fn clear<P, W: Write>(workspace: &Workspace<P>, out: &mut W) -> anyhow::Result<()> {
    if workspace.session.clear() {
        writeln!(out, "Cleared {} template selection", workspace.region)?;
    } else {
        writeln!(
            out,
            "{} could not clear the {} template selection",
            style("Warning:").yellow().bold(),
            workspace.region
        )?;
    }
    Ok(())
}

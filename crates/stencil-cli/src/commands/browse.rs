// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Catalog browsing: `list`, `categories`, `show`.

use crate::workspace::Workspace;
use console::style;
use std::io::Write;

/// Prints the catalog, one template per line, marking the selection.
pub fn list<P, W: Write>(
    workspace: &Workspace<P>,
    category: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let selector = workspace.session.selector(|_: &str| {});
    let selector = match category {
        Some(category) => selector.with_category(category),
        None => selector,
    };

    let entries = selector.entries();
    if entries.is_empty() {
        match category {
            Some(category) => writeln!(
                out,
                "No {} templates in category {:?}",
                workspace.region, category
            )?,
            None => writeln!(out, "No {} templates", workspace.region)?,
        }
        return Ok(());
    }

    for entry in entries {
        let template = entry.template;
        let marker = if entry.selected {
            style("●").green().to_string()
        } else {
            " ".to_string()
        };
        let category = template
            .category
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        writeln!(
            out,
            "{} {:<24} {}{}",
            marker,
            style(&template.id).bold(),
            template.name,
            style(category).dim()
        )?;
    }
    Ok(())
}

/// Prints the distinct categories in catalog order.
pub fn categories<P, W: Write>(workspace: &Workspace<P>, out: &mut W) -> anyhow::Result<()> {
    for category in workspace.catalog().categories() {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}

/// Prints a template's record as pretty JSON.
pub fn show<P, W: Write>(workspace: &Workspace<P>, id: &str, out: &mut W) -> anyhow::Result<()> {
    let Some(template) = workspace.catalog().get_by_id(id) else {
        anyhow::bail!("Unknown {} template: {}", workspace.region, id);
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&template.to_record())?)?;
    Ok(())
}

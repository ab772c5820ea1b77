// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Template application.
//!
//! [`apply_template`] turns a template and the caller's current property set
//! into the property set to render, plus the template's style variables.
//!
//! # Layering
//!
//! For templates with the [`Transform::Layered`] strategy:
//!
//! 1. Copy `current` (the caller's value is never touched)
//! 2. Overlay every key of `defaults`
//! 3. Overlay every key of `variant[mode]`, if present; variants win
//!
//! Templates with a [`Transform::Custom`] strategy replace steps 1-3 with
//! their own transform. Style variables are never merged into the property
//! set; they are returned next to it.

use crate::props::PropertySet;
use crate::template::{DeviceMode, StyleVars, Template, Transform};

/// The result of applying a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<P> {
    /// The merged property set to render.
    pub props: P,
    /// Style variables to assign on the render target.
    pub styles: StyleVars,
}

impl<P> Applied<P> {
    /// Renders the style variables as CSS custom property declarations,
    /// one per line, ordered by name.
    ///
    /// Names without a leading `--` are prefixed with it. Names that are
    /// empty once the prefix is removed are skipped.
    pub fn css_variables(&self) -> String {
        let mut css = String::new();
        for (name, value) in &self.styles {
            let name = name.strip_prefix("--").unwrap_or(name);
            if name.is_empty() {
                tracing::warn!("Skipping style variable with an empty name");
                continue;
            }
            css.push_str(&format!("--{}: {};\n", name, value));
        }
        css
    }
}

/// Applies `template` to `current` for the given device mode.
///
/// Pure and total: no side effects, and no failure for property sets that
/// lack fields the template overrides.
pub fn apply_template<P: PropertySet>(
    template: &Template<P>,
    current: &P,
    mode: DeviceMode,
) -> Applied<P> {
    let props = match &template.transform {
        Transform::Layered => layered_merge(template, current, mode),
        Transform::Custom(transform) => transform.transform(current, mode),
    };

    tracing::debug!(template = %template.id, mode = %mode, "Applied template");

    Applied {
        props,
        styles: template.styles.clone(),
    }
}

/// The generic merge: copy, overlay defaults, overlay the device variant.
///
/// Custom transforms can call this to keep the standard layering and adjust
/// the result.
pub fn layered_merge<P: PropertySet>(
    template: &Template<P>,
    current: &P,
    mode: DeviceMode,
) -> P {
    let mut next = current.clone();
    next.overlay(&template.defaults);
    if let Some(variant) = template.variant.get(mode) {
        next.overlay(variant);
    }
    next
}

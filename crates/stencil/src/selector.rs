// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The selector interaction contract.
//!
//! [`TemplateSelector`] is what a picker UI binds to: the templates to show,
//! which one is currently applied, and the pick / preview / reset actions.
//! Picking and resetting only call the host's `on_apply` callback; what
//! "applying" means (merging, persisting, re-rendering) stays with the host,
//! usually a [`TemplateSession`](crate::session::TemplateSession).

use crate::catalog::Catalog;
use crate::engine::{apply_template, Applied};
use crate::props::PropertySet;
use crate::template::{DeviceMode, Template};

/// One row of a selector: a template and whether it is the current one.
#[derive(Debug)]
pub struct SelectorEntry<'a, P> {
    /// The catalog template.
    pub template: &'a Template<P>,
    /// Whether this template is the current selection.
    pub selected: bool,
}

/// Picker state and actions over a catalog.
pub struct TemplateSelector<'a, P, F>
where
    F: FnMut(&str),
{
    catalog: &'a Catalog<P>,
    category: Option<String>,
    current: Option<String>,
    on_apply: F,
}

impl<'a, P, F> TemplateSelector<'a, P, F>
where
    F: FnMut(&str),
{
    /// Creates a selector showing the whole catalog.
    ///
    /// `current` is the id of the template currently applied, if any.
    pub fn new(catalog: &'a Catalog<P>, current: Option<String>, on_apply: F) -> Self {
        Self {
            catalog,
            category: None,
            current,
            on_apply,
        }
    }

    /// Restricts the listed templates to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The currently applied template id.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether `id` is the currently applied template.
    pub fn is_selected(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// The templates to show, in catalog order.
    pub fn templates(&self) -> Vec<&'a Template<P>> {
        self.catalog.list(self.category.as_deref())
    }

    /// The templates to show, each marked selected or not.
    pub fn entries(&self) -> Vec<SelectorEntry<'a, P>> {
        self.templates()
            .into_iter()
            .map(|template| SelectorEntry {
                selected: self.is_selected(&template.id),
                template,
            })
            .collect()
    }

    /// Picks the template `id`, calling `on_apply` with it.
    ///
    /// Unknown ids are ignored and reported as `false`.
    pub fn apply(&mut self, id: &str) -> bool {
        let Some(template) = self.catalog.get_by_id(id) else {
            tracing::debug!(id, "Ignoring pick of unknown template");
            return false;
        };
        self.select(template.id.clone());
        true
    }

    /// Picks the template named [`DEFAULT_TEMPLATE_NAME`](crate::DEFAULT_TEMPLATE_NAME).
    ///
    /// Does nothing and returns `false` if the catalog has none.
    pub fn reset(&mut self) -> bool {
        let Some(template) = self.catalog.default_template() else {
            tracing::debug!("No default template, reset ignored");
            return false;
        };
        self.select(template.id.clone());
        true
    }

    /// Computes what applying `id` would render, without picking it.
    pub fn preview(&self, id: &str, current: &P, mode: DeviceMode) -> Option<Applied<P>>
    where
        P: PropertySet,
    {
        self.catalog
            .get_by_id(id)
            .map(|template| apply_template(template, current, mode))
    }

    fn select(&mut self, id: String) {
        (self.on_apply)(&id);
        self.current = Some(id);
    }
}

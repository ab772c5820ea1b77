// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Catalog, engine and persistence wired together.
//!
//! A [`TemplateSession`] is the host side of the selector contract: picking
//! a template applies it to the caller's property set and records the choice
//! so the next session restores it.
//!
//! ```rust,ignore
//! let session = TemplateSession::new(catalog, SelectionStore::new(store));
//!
//! // Startup: restore the last choice, if it still exists
//! let props = session
//!     .restore_applied(&header_props, DeviceMode::Desktop)
//!     .map(|applied| applied.props)
//!     .unwrap_or(header_props);
//!
//! // User picks a template
//! if let Some(picked) = session.pick("centered", &props, DeviceMode::Mobile) {
//!     render(&picked.applied.props, &picked.applied.css_variables());
//!     if !picked.saved {
//!         notify("Your choice will not be remembered");
//!     }
//! }
//! ```

use crate::catalog::Catalog;
use crate::engine::{apply_template, Applied};
use crate::props::PropertySet;
use crate::selection::SelectionStore;
use crate::selector::TemplateSelector;
use crate::template::{DeviceMode, Template};
use std::sync::Arc;

/// A catalog plus the persisted selection for one UI region.
pub struct TemplateSession<P> {
    catalog: Arc<Catalog<P>>,
    selection: SelectionStore,
}

impl<P> TemplateSession<P> {
    /// Creates a session over a shared catalog.
    pub fn new(catalog: Arc<Catalog<P>>, selection: SelectionStore) -> Self {
        Self { catalog, selection }
    }

    /// The catalog this session picks from.
    pub fn catalog(&self) -> &Catalog<P> {
        &self.catalog
    }

    /// The persistence this session records picks in.
    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// The template chosen in an earlier session, if it still exists.
    pub fn restore(&self) -> Option<&Template<P>> {
        self.selection.load(&*self.catalog)
    }

    /// Id of the restored template, if any.
    pub fn selected_id(&self) -> Option<String> {
        self.restore().map(|template| template.id.clone())
    }

    /// Forgets the persisted selection. Returns `false` on storage failure.
    #[must_use]
    pub fn clear(&self) -> bool {
        self.selection.clear()
    }

    /// A selector over this session's catalog, marked with the restored
    /// selection.
    pub fn selector<F>(&self, on_apply: F) -> TemplateSelector<'_, P, F>
    where
        F: FnMut(&str),
    {
        TemplateSelector::new(&*self.catalog, self.selected_id(), on_apply)
    }
}

impl<P: PropertySet> TemplateSession<P> {
    /// Applies the restored template to `current`.
    pub fn restore_applied(&self, current: &P, mode: DeviceMode) -> Option<Applied<P>> {
        self.restore()
            .map(|template| apply_template(template, current, mode))
    }

    /// Applies template `id` to `current` and persists the choice.
    ///
    /// Returns `None` for unknown ids, in which case nothing is stored. A
    /// storage failure does not prevent the result; it is reported through
    /// [`Picked::saved`].
    pub fn pick(&self, id: &str, current: &P, mode: DeviceMode) -> Option<Picked<P>> {
        let template = self.catalog.get_by_id(id)?;
        Some(self.commit(template, current, mode))
    }

    /// Applies and persists the default template, if the catalog has one.
    pub fn reset(&self, current: &P, mode: DeviceMode) -> Option<Picked<P>> {
        let template = self.catalog.default_template()?;
        Some(self.commit(template, current, mode))
    }

    fn commit(&self, template: &Template<P>, current: &P, mode: DeviceMode) -> Picked<P> {
        let applied = apply_template(template, current, mode);
        let saved = self.selection.save(&template.id);
        if saved {
            tracing::info!(template = %template.id, "Selected template");
        }
        Picked {
            id: template.id.clone(),
            applied,
            saved,
        }
    }
}

/// Outcome of [`TemplateSession::pick`] and [`TemplateSession::reset`].
#[derive(Debug, Clone)]
pub struct Picked<P> {
    /// Id of the template that was applied.
    pub id: String,
    /// The applied property set and styles.
    pub applied: Applied<P>,
    /// Whether the choice was persisted.
    pub saved: bool,
}

// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The catalog and session a CLI invocation works on.

use crate::config::Config;
use crate::kv::open_selection;
use anyhow::Context;
use std::sync::Arc;
use stencil::{Catalog, Region, TemplateSession};

/// Everything a command needs: the region, its catalog, and its session.
pub struct Workspace<P> {
    /// The region being templated.
    pub region: Region,
    /// Catalog plus persisted selection.
    pub session: TemplateSession<P>,
}

impl<P> Workspace<P> {
    /// Opens the workspace for `region` as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog cannot be read or is
    /// invalid. Storage problems only disable persistence.
    pub fn open(config: &Config, region: Region) -> anyhow::Result<Self> {
        let catalog = match config.catalog.resolved_path(&config.root) {
            Some(path) => Catalog::from_json_path(&path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::from_records(region.builtin_records()?)?,
        };
        tracing::debug!(region = %region, templates = catalog.len(), "Opened catalog");

        let selection = open_selection(&config.storage, &config.root, region);

        Ok(Self {
            region,
            session: TemplateSession::new(Arc::new(catalog), selection),
        })
    }

    /// The catalog being browsed.
    pub fn catalog(&self) -> &Catalog<P> {
        self.session.catalog()
    }
}
